//! Per-slide visual curves
//!
//! Opacity, scale and rotation of every slide as pure functions of the
//! slide's position relative to the active index and the current timer value.

use super::timer::TIMER_END;

/// Crossfade window, in timer units
const FADE_END: f32 = 3.0;
/// Zoom keyframes, in timer units
const SCALE_INPUT: [f32; 3] = [0.0, 3.0, 6.0];
const SCALE_OUTPUT: [f32; 3] = [1.0, 1.05, 1.1];
/// Rotation window, in timer units
const ROTATE_INPUT: [f32; 2] = [3.0, 6.0];
/// Scale of every slide that is not active
pub const RESTING_SCALE: f32 = 1.1;

/// Role of a slide for the current active index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideRole {
    Active,
    /// Immediately before the active slide, wrapping
    Previous,
    /// Not mounted
    Hidden,
}

/// Visual transform applied to both image layers of a slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransform {
    pub opacity: f32,
    pub scale: f32,
    pub rotation_degrees: f32,
}

impl Default for SlideTransform {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            rotation_degrees: 0.0,
        }
    }
}

/// The two mounted slides, computed once per index change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedPair {
    pub active: usize,
    /// `None` when the previous slide is the active one (single slide)
    pub previous: Option<usize>,
}

impl RenderedPair {
    pub fn new(active: usize, count: usize) -> Self {
        let previous = previous_index(active, count);
        Self {
            active,
            previous: (previous != active).then_some(previous),
        }
    }

    /// Mounted indices in list order, so later slides layer on top
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.previous.into_iter().chain([self.active]).collect();
        indices.sort_unstable();
        indices
    }

    pub fn contains(&self, index: usize) -> bool {
        self.active == index || self.previous == Some(index)
    }
}

pub fn previous_index(active: usize, count: usize) -> usize {
    if active > 0 { active - 1 } else { count.saturating_sub(1) }
}

pub fn slide_role(index: usize, active: usize, count: usize) -> SlideRole {
    if index == active {
        SlideRole::Active
    } else if index == previous_index(active, count) {
        SlideRole::Previous
    } else {
        SlideRole::Hidden
    }
}

/// Piecewise-linear interpolation, clamped at both ends
pub fn interpolate(input: f32, inputs: &[f32], outputs: &[f32]) -> f32 {
    debug_assert_eq!(inputs.len(), outputs.len());
    let (Some(&first), Some(&last)) = (inputs.first(), inputs.last()) else {
        return 0.0;
    };
    if input <= first {
        return outputs[0];
    }
    if input >= last {
        return outputs[outputs.len() - 1];
    }

    let segment = inputs
        .windows(2)
        .position(|pair| input <= pair[1])
        .unwrap_or(inputs.len() - 2);
    let (x0, x1) = (inputs[segment], inputs[segment + 1]);
    let (y0, y1) = (outputs[segment], outputs[segment + 1]);
    if x1 == x0 {
        return y1;
    }
    y0 + (y1 - y0) * (input - x0) / (x1 - x0)
}

pub fn opacity(role: SlideRole, timer: f32) -> f32 {
    match role {
        SlideRole::Active => interpolate(timer, &[0.0, FADE_END], &[0.0, 1.0]),
        SlideRole::Previous => interpolate(timer, &[0.0, FADE_END], &[1.0, 0.0]),
        SlideRole::Hidden => 0.0,
    }
}

pub fn scale(role: SlideRole, timer: f32) -> f32 {
    match role {
        SlideRole::Active => interpolate(timer, &SCALE_INPUT, &SCALE_OUTPUT),
        SlideRole::Previous | SlideRole::Hidden => RESTING_SCALE,
    }
}

/// Resting tilt of a slide: even positions lean one way, odd the other
pub fn resting_rotation(index: usize, rotate_degree: f32) -> f32 {
    if index % 2 == 0 {
        -rotate_degree
    } else {
        rotate_degree
    }
}

/// Rotation in degrees
pub fn rotation(index: usize, role: SlideRole, timer: f32, rotate_degree: f32) -> f32 {
    let tilt = resting_rotation(index, rotate_degree);
    match role {
        SlideRole::Active => interpolate(timer, &ROTATE_INPUT, &[0.0, tilt]),
        SlideRole::Previous | SlideRole::Hidden => tilt,
    }
}

/// Full transform of slide `index` at timer value `timer`
pub fn slide_transform(
    index: usize,
    active: usize,
    count: usize,
    timer: f32,
    rotate_degree: f32,
) -> SlideTransform {
    let role = slide_role(index, active, count);
    let timer = timer.clamp(0.0, TIMER_END);
    SlideTransform {
        opacity: opacity(role, timer),
        scale: scale(role, timer),
        rotation_degrees: rotation(index, role, timer, rotate_degree),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    mod roles {
        use super::*;

        #[test]
        fn previous_wraps_around() {
            assert_eq!(previous_index(0, 5), 4);
            assert_eq!(previous_index(3, 5), 2);
            assert_eq!(slide_role(4, 0, 5), SlideRole::Previous);
            assert_eq!(slide_role(2, 0, 5), SlideRole::Hidden);
        }

        #[test]
        fn single_slide_is_only_active() {
            assert_eq!(slide_role(0, 0, 1), SlideRole::Active);
            let pair = RenderedPair::new(0, 1);
            assert_eq!(pair.previous, None);
            assert_eq!(pair.indices(), vec![0]);
        }

        #[test]
        fn rendered_pair_keeps_list_order() {
            let pair = RenderedPair::new(0, 3);
            assert_eq!(pair.indices(), vec![0, 2]);
            assert!(pair.contains(2));
            assert!(!pair.contains(1));

            assert_eq!(RenderedPair::new(2, 3).indices(), vec![1, 2]);
        }
    }

    mod interpolation {
        use super::*;

        #[test]
        fn clamps_outside_range() {
            assert_eq!(interpolate(-1.0, &[0.0, 3.0], &[0.0, 1.0]), 0.0);
            assert_eq!(interpolate(7.0, &[0.0, 3.0], &[0.0, 1.0]), 1.0);
        }

        #[test]
        fn walks_multiple_segments() {
            assert!(close(interpolate(1.5, &SCALE_INPUT, &SCALE_OUTPUT), 1.025));
            assert!(close(interpolate(4.5, &SCALE_INPUT, &SCALE_OUTPUT), 1.075));
        }
    }

    mod transforms {
        use super::*;

        #[test]
        fn crossfade_over_first_three_units() {
            assert!(close(opacity(SlideRole::Active, 0.0), 0.0));
            assert!(close(opacity(SlideRole::Previous, 0.0), 1.0));
            assert!(close(opacity(SlideRole::Active, 1.5), 0.5));
            assert!(close(opacity(SlideRole::Previous, 1.5), 0.5));
            assert!(close(opacity(SlideRole::Active, 5.0), 1.0));
            assert!(close(opacity(SlideRole::Previous, 5.0), 0.0));
            assert_eq!(opacity(SlideRole::Hidden, 2.0), 0.0);
        }

        #[test]
        fn active_zooms_in_and_others_rest() {
            assert!(close(scale(SlideRole::Active, 0.0), 1.0));
            assert!(close(scale(SlideRole::Active, 3.0), 1.05));
            assert!(close(scale(SlideRole::Active, 8.0), 1.1));
            assert_eq!(scale(SlideRole::Previous, 0.0), RESTING_SCALE);
        }

        #[test]
        fn rotation_starts_after_fade() {
            let degree = std::f32::consts::PI;
            assert_eq!(rotation(1, SlideRole::Active, 2.0, degree), 0.0);
            assert!(close(rotation(1, SlideRole::Active, 4.5, degree), degree / 2.0));
            assert!(close(rotation(1, SlideRole::Active, 8.0, degree), degree));
            assert!(close(rotation(2, SlideRole::Active, 8.0, degree), -degree));
        }

        #[test]
        fn inactive_slides_hold_their_tilt() {
            assert_eq!(rotation(0, SlideRole::Previous, 0.0, 10.0), -10.0);
            assert_eq!(rotation(3, SlideRole::Hidden, 0.0, 10.0), 10.0);
        }

        #[test]
        fn slide_transform_combines_roles() {
            let active = slide_transform(1, 1, 3, 0.0, 5.0);
            assert_eq!(
                active,
                SlideTransform {
                    opacity: 0.0,
                    scale: 1.0,
                    rotation_degrees: 0.0
                }
            );

            let previous = slide_transform(0, 1, 3, 0.0, 5.0);
            assert_eq!(previous.opacity, 1.0);
            assert_eq!(previous.scale, RESTING_SCALE);
            assert_eq!(previous.rotation_degrees, -5.0);
        }
    }
}
