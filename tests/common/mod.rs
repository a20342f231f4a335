use approx::assert_abs_diff_eq;
use lunar_ephem::moon_position::MoonPosition;

/// Expected values of the worked example of Meeus, ch. 47 (1992 April 12, 0h TD).
pub const MEEUS_EXAMPLE_JDE: f64 = 2448724.5;

pub fn meeus_example_expected() -> MoonPosition {
    MoonPosition {
        jde: MEEUS_EXAMPLE_JDE,
        longitude: 133.162655,
        latitude: -3.224464,
        distance: 368409.684816,
        cartesian: nalgebra::Vector3::new(-251619.697297, 268297.992270, -20722.237874),
    }
}

/// Compare two positions: angles in degrees against `angle_eps`, lengths in km against `km_eps`.
pub fn assert_position_close(
    actual: &MoonPosition,
    expected: &MoonPosition,
    angle_eps: f64,
    km_eps: f64,
) {
    assert_eq!(actual.jde, expected.jde);
    assert_abs_diff_eq!(actual.longitude, expected.longitude, epsilon = angle_eps);
    assert_abs_diff_eq!(actual.latitude, expected.latitude, epsilon = angle_eps);
    assert_abs_diff_eq!(actual.distance, expected.distance, epsilon = km_eps);
    assert_abs_diff_eq!(actual.cartesian, expected.cartesian, epsilon = km_eps);
}
