//! Growable word memory
//!
//! Reads past the current extent yield zero. Writes past it grow the memory,
//! zero-filling the gap. Growth is bounded by an optional ceiling and by what
//! the allocator can provide.

use tracing::trace;

use crate::error::{Result, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<i64>,
    limit: Option<usize>,
}

impl Memory {
    /// Memory holding a copy of `image`
    ///
    /// The image itself may exceed `limit`; the limit only bounds growth.
    pub fn new(image: &[i64], limit: Option<usize>) -> Self {
        Memory {
            cells: image.to_vec(),
            limit,
        }
    }

    /// Discard all contents and reload `image`
    pub fn reset(&mut self, image: &[i64]) {
        self.cells.clear();
        self.cells.extend_from_slice(image);
    }

    /// Translate a signed address into an index
    pub fn index(address: i64) -> Result<usize> {
        usize::try_from(address).map_err(|_| RuntimeError::InvalidAddress { address })
    }

    /// Read the word at `address`
    pub fn read(&self, address: i64) -> Result<i64> {
        Ok(self.peek(Self::index(address)?))
    }

    /// Write the word at `address`, growing memory when needed
    pub fn write(&mut self, address: i64, value: i64) -> Result<()> {
        let index = Self::index(address)?;
        if index >= self.cells.len() {
            if self.limit.is_some_and(|limit| index >= limit) {
                return Err(RuntimeError::InvalidAddress { address });
            }
            let additional = index + 1 - self.cells.len();
            self.cells
                .try_reserve(additional)
                .map_err(|_| RuntimeError::InvalidAddress { address })?;
            trace!(from = self.cells.len(), to = index + 1, "growing memory");
            self.cells.resize(index + 1, 0);
        }
        self.cells[index] = value;
        Ok(())
    }

    /// Word at an unsigned index, zero past the extent
    #[inline]
    pub fn peek(&self, index: usize) -> i64 {
        self.cells.get(index).copied().unwrap_or(0)
    }

    /// Current extent in words
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.cells
    }
}
