// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//
// Weighted quick-union: union by size, full path compression in `find`.
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	size: Vec<usize>,
	count: usize,
}

impl DisjointSet {
	/// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`.
	pub fn new(n: usize) -> DisjointSet {
		DisjointSet {
			parent: (0..n).collect(),
			size: vec![1; n],
			count: n,
		}
	}

	/// Like [`new`](DisjointSet::new), but reports a failed allocation
	/// instead of aborting.
	pub fn try_new(n: usize) -> Result<DisjointSet> {
		let mut parent = Vec::new();
		let mut size = Vec::new();
		parent.try_reserve_exact(n).and_then(|_| size.try_reserve_exact(n))
			.map_err(|e| Error::InvalidArgument(format!("cannot hold {} elements: {}", n, e)))?;
		parent.extend(0..n);
		size.resize(n, 1);
		Ok(DisjointSet { parent, size, count: n })
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	/// Number of disjoint sets.
	pub fn count(&self) -> usize {
		self.count
	}

	fn validate(&self, x: usize) -> Result<()> {
		if x >= self.parent.len() {
			return Err(Error::IndexOutOfRange { index: x, bound: self.parent.len() });
		}
		Ok(())
	}

	/// Returns the root of `x`. Every node visited on the way is re-pointed
	/// straight at the root.
	pub fn find(&mut self, x: usize) -> Result<usize> {
		self.validate(x)?;
		Ok(self.root(x))
	}

	// x must be in range.
	pub(crate) fn root(&mut self, x: usize) -> usize {
		let parent = self.parent[x];
		if parent != x {
			self.parent[x] = self.root(parent);
		}
		self.parent[x]
	}

	/// Merges the sets holding `a` and `b`. Returns `false` if they were
	/// already one set.
	///
	/// The root of the smaller tree goes under the root of the larger one;
	/// on equal sizes `b`'s root goes under `a`'s.
	pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
		self.validate(a)?;
		self.validate(b)?;
		let a_root = self.root(a);
		let b_root = self.root(b);
		if a_root == b_root {
			return Ok(false);
		}
		if self.size[a_root] < self.size[b_root] {
			self.parent[a_root] = b_root;
			self.size[b_root] += self.size[a_root];
		} else {
			self.parent[b_root] = a_root;
			self.size[a_root] += self.size[b_root];
		}
		self.count -= 1;
		Ok(true)
	}

	pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
		Ok(self.find(a)? == self.find(b)?)
	}

	/// Number of elements in the set holding `x`.
	pub fn component_size(&mut self, x: usize) -> Result<usize> {
		let root = self.find(x)?;
		Ok(self.size[root])
	}
}
