/// Presentation targets for generated colors.
use crate::color::Rgb;
use crate::generator::{ColorGenerator, UnitSource};

/// Something that can show a color: a background to paint and a label to write.
pub trait ColorSink {
    fn set_background(&mut self, color: &str);
    fn set_label(&mut self, color: &str);
}

/// Generate a new color and hand it to both parts of the sink.
pub fn update_background<S, K>(generator: &ColorGenerator, rng: &mut S, sink: &mut K) -> Rgb
where
    S: UnitSource + ?Sized,
    K: ColorSink + ?Sized,
{
    let color = generator.generate(rng);
    let hex = color.to_hex();
    sink.set_background(&hex);
    sink.set_label(&hex);
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, String)>,
    }

    impl ColorSink for Recorder {
        fn set_background(&mut self, color: &str) {
            self.calls.push(("background", color.to_string()));
        }

        fn set_label(&mut self, color: &str) {
            self.calls.push(("label", color.to_string()));
        }
    }

    struct Zero;

    impl UnitSource for Zero {
        fn next_unit(&mut self) -> f64 {
            0.0
        }
    }

    #[test]
    fn both_targets_receive_the_same_color() {
        let mut sink = Recorder::default();
        let color = update_background(&ColorGenerator::default(), &mut Zero, &mut sink);
        assert_eq!(color, Rgb::new(90, 90, 90));
        assert_eq!(
            sink.calls,
            vec![
                ("background", "#5a5a5a".to_string()),
                ("label", "#5a5a5a".to_string()),
            ]
        );
    }

    #[test]
    fn every_update_draws_a_fresh_color() {
        let mut sink = Recorder::default();
        let generator = ColorGenerator::new(Some(0), Some(0), Some(0), Some(0), Some(0), Some(0));
        let mut rng = rand::rng();
        for _ in 0..3 {
            update_background(&generator, &mut rng, &mut sink);
        }
        assert_eq!(sink.calls.len(), 6);
        for pair in sink.calls.chunks(2) {
            assert_eq!(pair[0].1, pair[1].1);
        }
    }

    #[test]
    fn works_with_dyn_sink() {
        let mut recorder = Recorder::default();
        let sink: &mut dyn ColorSink = &mut recorder;
        update_background(&ColorGenerator::default(), &mut Zero, sink);
        assert_eq!(recorder.calls.len(), 2);
    }
}
