use crate::{Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// A forest of disjoint sets over the elements `0..len`.
///
/// Unions are weighted by component size (the smaller tree is attached under
/// the root of the larger one, ties go to the first argument's root), and
/// `find` halves the path it walks, so both operations run in near-constant
/// amortized time.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `len` singleton components, each element being its own root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `len` is zero.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::invalid_argument(
                "disjoint set must contain at least one element",
            ));
        }

        Ok(Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        })
    }

    /// Returns the number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the representative element of the component containing `id`.
    pub fn find(&mut self, id: usize) -> Result<usize> {
        self.validate(id)?;
        Ok(self.root(id))
    }

    /// Merges the components containing `a` and `b`.
    /// Does nothing if they are already connected.
    pub fn union(&mut self, a: usize, b: usize) -> Result<()> {
        self.validate(a)?;
        self.validate(b)?;

        let mut a = self.root(a);
        let mut b = self.root(b);
        if a == b {
            return Ok(());
        }

        if self.size[a] < self.size[b] {
            (a, b) = (b, a);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.count -= 1;

        Ok(())
    }

    /// Returns `true` if `a` and `b` belong to the same component.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    fn root(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            let grandparent = self.parent[self.parent[id]];
            self.parent[id] = grandparent;
            id = grandparent;
        }
        id
    }

    fn validate(&self, id: usize) -> Result<()> {
        if id >= self.len() {
            return Err(Error::invalid_argument(format!(
                "element {id} is out of range 0..{}",
                self.len()
            )));
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
