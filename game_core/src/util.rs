use rand::Rng;

/// Linearly map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
/// Values outside the input range extrapolate.
pub fn scale_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if in_max == in_min {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Uniform jitter in `[-range/2, range/2]`, or `[0, range]` when `positive_only`
pub fn random_adjust<R: Rng + ?Sized>(rng: &mut R, range: f32, positive_only: bool) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    let sample = rng.gen::<f32>() * range;
    if positive_only {
        sample
    } else {
        sample - range / 2.0
    }
}

pub fn on_off(state: bool) -> &'static str {
    if state {
        "On"
    } else {
        "Off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scale_range() {
        assert_eq!(scale_range(5.0, 0.0, 10.0, -40.0, 0.0), -20.0);
        assert_eq!(scale_range(0.0, 0.0, 5.0, 1.0, 3.0), 1.0);
        assert_eq!(scale_range(10.0, 0.0, 5.0, 1.0, 3.0), 5.0, "extrapolates");
        assert_eq!(scale_range(3.0, 2.0, 2.0, 1.0, 3.0), 1.0, "degenerate input range");
    }

    #[test]
    fn test_random_adjust_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_adjust(&mut rng, 1.0, false);
            assert!((-0.5..=0.5).contains(&v), "jitter {v} out of range");
            let p = random_adjust(&mut rng, 1.0, true);
            assert!((0.0..=1.0).contains(&p), "positive jitter {p} out of range");
        }
        assert_eq!(random_adjust(&mut rng, 0.0, false), 0.0);
    }

    #[test]
    fn test_on_off() {
        assert_eq!(on_off(true), "On");
        assert_eq!(on_off(false), "Off");
    }
}
