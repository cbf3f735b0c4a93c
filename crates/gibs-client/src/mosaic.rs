//! Tile grid partitioning and mosaic compositing.
//!
//! Used when a single full-extent request returns blank imagery: the
//! bounding box is split into a grid of ~150m ground tiles, each fetched
//! independently and pasted into one canvas. Failed tiles stay black.

use image::{imageops, DynamicImage, RgbImage};

use geo_common::BoundingBox;

/// Ground distance covered by one tile edge, in meters.
pub const TILE_EDGE_M: f64 = 150.0;

/// Fixed pixel size of each requested tile.
pub const PIXELS_PER_TILE: u32 = 1024;

/// An N x M grid of tiles covering a physical extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub tiles_x: u32,
    pub tiles_y: u32,
    pub pixels_per_tile: u32,
}

impl TileGrid {
    /// Partition an extent into tiles of ~150m ground distance each.
    /// Always at least 1x1.
    pub fn for_extent(width_m: f64, height_m: f64) -> Self {
        Self {
            tiles_x: ((width_m / TILE_EDGE_M) as u32).max(1),
            tiles_y: ((height_m / TILE_EDGE_M) as u32).max(1),
            pixels_per_tile: PIXELS_PER_TILE,
        }
    }

    /// Pixel dimensions of the composited canvas.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.pixels_per_tile * self.tiles_x,
            self.pixels_per_tile * self.tiles_y,
        )
    }

    /// Geographic extent of tile (col, row). Row 0 is the southern edge.
    pub fn tile_bbox(&self, full: &BoundingBox, col: u32, row: u32) -> BoundingBox {
        let tile_width_deg = full.width_deg() / self.tiles_x as f64;
        let tile_height_deg = full.height_deg() / self.tiles_y as f64;

        let min_lon = full.min_lon + col as f64 * tile_width_deg;
        let min_lat = full.min_lat + row as f64 * tile_height_deg;

        BoundingBox::new(
            min_lon,
            min_lat,
            min_lon + tile_width_deg,
            min_lat + tile_height_deg,
        )
    }

    /// Canvas pixel origin of tile (col, row). The southern row pastes at
    /// the bottom of the canvas, so the y axis is flipped.
    pub fn pixel_origin(&self, col: u32, row: u32) -> (i64, i64) {
        (
            (col * self.pixels_per_tile) as i64,
            ((self.tiles_y - row - 1) * self.pixels_per_tile) as i64,
        )
    }
}

/// Paste a downloaded tile into the canvas at the given pixel origin.
/// Out-of-bounds portions are clipped by the underlying imageops.
pub fn composite(canvas: &mut RgbImage, tile: &DynamicImage, x: i64, y: i64) {
    imageops::replace(canvas, &tile.to_rgb8(), x, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::uniform_image;

    #[test]
    fn test_grid_for_small_extent_is_1x1() {
        let grid = TileGrid::for_extent(100.0, 100.0);
        assert_eq!(grid.tiles_x, 1);
        assert_eq!(grid.tiles_y, 1);
    }

    #[test]
    fn test_grid_for_large_extent() {
        let grid = TileGrid::for_extent(600.0, 450.0);
        assert_eq!(grid.tiles_x, 4);
        assert_eq!(grid.tiles_y, 3);
    }

    #[test]
    fn test_canvas_size_matches_grid() {
        let grid = TileGrid::for_extent(600.0, 450.0);
        assert_eq!(grid.canvas_size(), (4096, 3072));
    }

    #[test]
    fn test_tile_bboxes_partition_full_extent() {
        let grid = TileGrid::for_extent(300.0, 300.0);
        let full = BoundingBox::new(-99.06, 20.13, -99.04, 20.15);

        let southwest = grid.tile_bbox(&full, 0, 0);
        assert!((southwest.min_lon - full.min_lon).abs() < 1e-12);
        assert!((southwest.min_lat - full.min_lat).abs() < 1e-12);

        let northeast = grid.tile_bbox(&full, grid.tiles_x - 1, grid.tiles_y - 1);
        assert!((northeast.max_lon - full.max_lon).abs() < 1e-9);
        assert!((northeast.max_lat - full.max_lat).abs() < 1e-9);
    }

    #[test]
    fn test_pixel_origin_flips_rows() {
        let grid = TileGrid {
            tiles_x: 2,
            tiles_y: 2,
            pixels_per_tile: 1024,
        };
        // Southern row lands at the bottom of the canvas.
        assert_eq!(grid.pixel_origin(0, 0), (0, 1024));
        assert_eq!(grid.pixel_origin(1, 1), (1024, 0));
    }

    #[test]
    fn test_composite_with_missing_tiles() {
        let grid = TileGrid {
            tiles_x: 2,
            tiles_y: 2,
            pixels_per_tile: 16,
        };
        let (w, h) = grid.canvas_size();
        let mut canvas = RgbImage::new(w, h);

        // Only one of four tiles arrives; the rest stay black.
        let tile = uniform_image(16, 16, 200);
        let (x, y) = grid.pixel_origin(1, 0);
        composite(&mut canvas, &tile, x, y);

        assert_eq!(canvas.get_pixel(17, 17).0, [200, 200, 200]);
        assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_composite_empty_canvas_does_not_crash() {
        let grid = TileGrid::for_extent(300.0, 300.0);
        let (w, h) = grid.canvas_size();
        // Zero successful tiles: canvas stays valid and fully black.
        let canvas = RgbImage::new(w, h);
        assert!(canvas.pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
