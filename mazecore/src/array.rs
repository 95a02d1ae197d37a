use std::ops;

use crate::dims::Dims;

/// Dense row-major 2D buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    /// Builds the array by calling `f` for every position in row-major order.
    pub fn from_fn(width: usize, height: usize, f: impl FnMut(Dims) -> T) -> Self {
        let size = Dims(width as i32, height as i32);
        Self {
            buf: Dims::iter_fill(Dims::ZERO, size).map(f).collect(),
            width,
            height,
        }
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Dims::from_linear_index(idx, self.size()))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.buf.chunks(self.width)
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing() {
        let arr = Array2D::from_fn(3, 2, |pos| pos);
        assert_eq!(arr.len(), 6);
        assert_eq!(arr.dim_to_idx(Dims(2, 1)), Some(5));
        assert_eq!(arr.idx_to_dim(4), Some(Dims(1, 1)));
        assert_eq!(arr[Dims(1, 1)], Dims(1, 1));
        assert_eq!(arr.rows().count(), 2);
    }

    #[test]
    fn out_of_bounds() {
        let arr = Array2D::from_fn(3, 2, |_| 0u8);
        assert!(arr.get(Dims(3, 0)).is_none());
        assert!(arr.get(Dims(0, 2)).is_none());
        assert!(arr.get(Dims(-1, 0)).is_none());
        assert!(arr.idx_to_dim(6).is_none());
    }

    #[test]
    #[should_panic]
    fn index_panics_out_of_bounds() {
        let arr = Array2D::from_fn(1, 1, |_| 0u8);
        let _ = arr[Dims(1, 1)];
    }
}
