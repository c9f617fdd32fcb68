use std::ops::Index;

use crate::error::{LoopPerfError, Result};

/// Immutable sequence of bytes iterated by the loop variants.
///
/// Element `i` holds `i mod 256`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    data: Vec<u8>,
}

impl Dataset {
    /// Builds a dataset of `size` elements.
    ///
    /// The allocation is reserved up front, so a size the allocator cannot satisfy is
    /// reported as [`LoopPerfError::ResourceExhaustion`] instead of aborting the process.
    pub fn generate(size: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|source| LoopPerfError::ResourceExhaustion {
                requested: size,
                source,
            })?;

        // Wrapping truncation is the intended `i mod 256`
        data.extend((0..size).map(|i| i as u8));

        tracing::debug!("Generated dataset with {} elements", size);

        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// One-shot forward cursor over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.data.iter()
    }

    /// Calls `f` once per element, in index order, from the dataset's own traversal.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&u8),
    {
        self.data.iter().for_each(f);
    }
}

impl Index<usize> for Dataset {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
