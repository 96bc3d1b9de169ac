//! Pixel blocks for adaptive sampling.
//!
//! The image is walked in small square blocks. Order is part of the
//! algorithm: each block compares itself against pixels written by blocks
//! above and to the left, so blocks must come strictly row-major.

/// A rectangular region of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// X coordinate of the block's top-left corner
    pub x: u32,
    /// Y coordinate of the block's top-left corner
    pub y: u32,
    /// Width of the block in pixels (smaller at the right edge)
    pub width: u32,
    /// Height of the block in pixels (smaller at the bottom edge)
    pub height: u32,
    /// Index of this block in render order
    pub index: usize,
}

impl Block {
    /// Create a new block.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this block.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Continuous image coordinates of the block's nominal center.
    ///
    /// Always half a pixel in from the top-left corner, which is the center
    /// of a full 2x2 block.
    pub fn center(&self) -> (f32, f32) {
        (self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

/// Side length of an adaptive sampling block.
pub const BLOCK_SIZE: u32 = 2;

/// Generate blocks covering the image in row-major order.
///
/// Blocks on the right and bottom edges are clipped to the image when the
/// size does not divide evenly.
pub fn generate_blocks(width: u32, height: u32, block_size: u32) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = block_size.min(width - x);
            let bh = block_size.min(height - y);
            blocks.push(Block::new(x, y, bw, bh, index));
            index += 1;
            x += block_size;
        }
        y += block_size;
    }

    blocks
}
