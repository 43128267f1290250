use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

#[derive(Clone, Debug)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area() as usize];
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &T)> {
        self.bounds.iter().zip(self.cells.iter())
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.i * self.bounds.extent.j + index.j) as usize]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.i * self.bounds.extent.j + index.j) as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn get_outside_bounds_is_none() {
        let mut grid = BoundedGrid::new(BoundsOriginRoot::new(2, 3), 0u8);
        grid[&Vec2 { i: 1, j: 2 }] = 7;

        assert_eq!(grid.get(&Vec2 { i: 1, j: 2 }), Some(&7));
        assert_eq!(grid.get(&Vec2 { i: 0, j: 0 }), Some(&0));
        assert_eq!(grid.get(&Vec2 { i: 2, j: 0 }), None);
        assert_eq!(grid.get(&Vec2 { i: 0, j: -1 }), None);
    }

    #[test]
    fn iter_pairs_positions_with_cells() {
        let mut grid = BoundedGrid::new(BoundsOriginRoot::new(2, 2), '.');
        grid[&Vec2 { i: 1, j: 0 }] = '#';

        let walls: Vec<Vec2> = grid
            .iter()
            .filter(|(_, c)| **c == '#')
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(walls, vec![Vec2 { i: 1, j: 0 }]);
    }
}
