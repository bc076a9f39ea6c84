/// Angular width of one sector, in degrees.
pub fn sector_width(sector_count: usize) -> f32 {
    360.0 / sector_count as f32
}

/// Maps a wheel rotation to the sector sitting under the pointer.
///
/// Only `angle mod 360` matters. On an exact sector edge the index is
/// floored, so the higher of the two touching sectors wins: with six sectors
/// and the pointer at 270°, angle 30° sits between sectors 3 and 4 and
/// resolves to 4.
pub fn landing_index(angle: f64, sector_count: usize, pointer_offset: f32) -> usize {
    debug_assert!(sector_count > 0);

    let width = 360.0 / sector_count as f64;
    let pointer = f64::from(pointer_offset);
    let fixed = (360.0 - angle.rem_euclid(360.0) + pointer).rem_euclid(360.0);
    let index = (fixed / width).floor() as usize;

    // float noise near 360 must not push us past the last sector
    index.min(sector_count - 1)
}
