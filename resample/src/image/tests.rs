use super::*;

#[test]
fn test_region_end_and_contains() {
    let region = Region::new([-2, 3], [4, 2]);
    assert_eq!(region.end(), [1, 4]);
    assert!(region.contains(&[-2, 3]));
    assert!(region.contains(&[1, 4]));
    assert!(!region.contains(&[2, 4]));
    assert!(!region.contains(&[0, 2]));
    assert_eq!(region.pixel_count(), 8);
}

#[test]
fn test_region_clamp() {
    let region = Region::new([0, 10], [5, 5]);
    assert_eq!(region.clamp(&[-3, 20]), [0, 14]);
    assert_eq!(region.clamp(&[2, 12]), [2, 12]);
}

#[test]
fn test_empty_region() {
    let region = Region::<2>::from_size([3, 0]);
    assert!(region.is_empty());
    assert_eq!(region.pixel_count(), 0);
    assert_eq!(region.indices().count(), 0);
}

#[test]
fn test_indices_axis_zero_fastest() {
    let region = Region::new([1, 5], [2, 3]);
    let indices: Vec<_> = region.indices().collect();
    assert_eq!(
        indices,
        vec![[1, 5], [2, 5], [1, 6], [2, 6], [1, 7], [2, 7]]
    );
}

#[test]
fn test_padded_and_cropped() {
    let region = Region::new([4, 4], [2, 2]);
    let padded = region.padded(3);
    assert_eq!(padded, Region::new([1, 1], [8, 8]));

    let largest = Region::from_size([6, 20]);
    assert_eq!(padded.cropped_by(&largest), Some(Region::new([1, 1], [5, 8])));
    assert_eq!(
        Region::new([10, 0], [2, 2]).cropped_by(&largest),
        None
    );
}

#[test]
fn test_nd_image_layout() {
    let image = NdImage::from_fn([3, 2], |[x, y]| (x + 10 * y) as u16);
    assert_eq!(image.data(), &[0, 1, 2, 10, 11, 12]);
    assert_eq!(image.pixel(&[2, 1]), &[12]);
    assert_eq!(image.offset(&[1, 1]), 4);
}

#[test]
fn test_nd_image_components_and_start() {
    let mut image = NdImage::filled([2, 2], 3, 0i32).with_start([5, -1]);
    image.set_pixel(&[6, 0], &[1, 2, 3]);

    assert_eq!(Image::region(&image), Region::new([5, -1], [2, 2]));
    assert_eq!(Image::components(&image), 3);

    let mut out = [0.0; 3];
    image.read_pixel(&[6, 0], &mut out);
    assert_eq!(out, [1.0, 2.0, 3.0]);
    image.read_pixel(&[5, -1], &mut out);
    assert_eq!(out, [0.0, 0.0, 0.0]);
}

#[test]
fn test_image_through_reference() {
    fn first_value<I: Image<1>>(image: I) -> f64 {
        let mut out = [0.0];
        image.read_pixel(&image.region().start, &mut out);
        out[0]
    }
    let image = NdImage::new([2], 1, vec![7.5f32, 1.0]);
    assert_eq!(first_value(&image), 7.5);
    assert_eq!(first_value(&&image), 7.5);
}

#[test]
#[should_panic(expected = "data length")]
fn test_length_mismatch_panics() {
    let _ = NdImage::new([2, 2], 1, vec![0.0f64; 3]);
}
