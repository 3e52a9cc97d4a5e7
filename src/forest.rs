//! The disjoint-set forest the maze is generated in.
//!
//! Each cell starts as its own group; [`DisjointForest::union`] merges groups
//! with union-by-size, and [`DisjointForest::root`] chases parent links with
//! path halving. `root` is logically a query, but it rewires parent pointers
//! as it walks, so it takes `&mut self`; the observable partition never
//! changes from it.
//!
//! Indices are not validated here. The public [`Maze`](crate::Maze) boundary
//! checks them before they reach the forest; passing an out-of-range index
//! directly panics on the slice access.

pub struct DisjointForest {
    parent: Vec<usize>,
    group_size: Vec<usize>,
    groups: usize,
}

impl DisjointForest {
    /// Forest of `cells` singleton groups.
    pub fn new(cells: usize) -> Self {
        Self {
            parent: (0..cells).collect(),
            group_size: vec![1; cells],
            groups: cells,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of live groups.
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Representative of `i`'s group, compressing the path on the way up.
    pub fn root(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Merge the groups holding `a` and `b`. Returns `false` when they were
    /// already one group (including `a == b`).
    ///
    /// The smaller group is grafted under the larger group's root; on equal
    /// sizes `b`'s root goes under `a`'s root, so a fixed union sequence
    /// always produces the same forest.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.root(a);
        let root_b = self.root(b);

        if root_a == root_b {
            return false;
        }

        if self.group_size[root_a] < self.group_size[root_b] {
            self.group_size[root_b] += self.group_size[root_a];
            self.parent[root_a] = root_b;
        } else {
            self.group_size[root_a] += self.group_size[root_b];
            self.parent[root_b] = root_a;
        }
        self.groups -= 1;

        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.root(a) == self.root(b)
    }

    /// Whether `i` is still its own group of one, i.e. it has never been on
    /// the winning or losing side of a union.
    pub fn is_singleton(&self, i: usize) -> bool {
        self.parent[i] == i && self.group_size[i] == 1
    }

    /// Size of the group holding `i`. Only root entries of the size table
    /// are live, so this resolves the root first.
    pub fn group_size(&mut self, i: usize) -> usize {
        let root = self.root(i);
        self.group_size[root]
    }
}
