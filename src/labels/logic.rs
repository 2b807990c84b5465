use bevy::math::Vec2;

/// Top-left corner that centers a label of `size` on the projected anchor point.
pub fn centered_top_left(projected: Vec2, size: Vec2) -> Vec2 {
    projected - size / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Vec2::new(640.0, 360.0), Vec2::new(40.0, 20.0), Vec2::new(620.0, 350.0))]
    #[case(Vec2::ZERO, Vec2::new(10.0, 10.0), Vec2::new(-5.0, -5.0))]
    #[case(Vec2::new(100.0, 50.0), Vec2::ZERO, Vec2::new(100.0, 50.0))]
    fn test_centered_top_left(#[case] projected: Vec2, #[case] size: Vec2, #[case] expected: Vec2) {
        assert_eq!(centered_top_left(projected, size), expected);
    }
}
