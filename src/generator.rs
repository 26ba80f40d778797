use std::io::Write;
use std::path::PathBuf;

use crate::error::{IconError, Result};
use crate::icon::render::IconRenderer;
use crate::icon::IconSlot;
use crate::sink::IconSink;

pub const COMPLETE_MESSAGE: &str = "Icon generation complete!";
pub const ADVISORY_MESSAGE: &str =
    "Note: icon.icns and icon.ico are placeholders. Use proper icon generation for production.";

/// Paths written by a run, in slot order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
}

/// Renders every slot and hands the PNG bytes to a sink.
///
/// Progress lines go to `out` so the console text can be captured.
pub struct Generator<'a, S: IconSink, W: Write> {
    renderer: &'a dyn IconRenderer,
    sink: S,
    out: W,
}

impl<'a, S: IconSink, W: Write> Generator<'a, S, W> {
    pub fn new(renderer: &'a dyn IconRenderer, sink: S, out: W) -> Self {
        Self {
            renderer,
            sink,
            out,
        }
    }

    /// Render one slot and write it. Identical sizes are not deduplicated.
    pub fn create_icon(&mut self, slot: &IconSlot) -> Result<PathBuf> {
        slot.validate()?;
        let bytes = self.renderer.render_png(slot.size)?;
        let path = self.sink.write(&slot.file_name, &bytes)?;
        self.say(&format!("Created {}", path.display()))?;
        Ok(path)
    }

    /// Generate every slot in order, stopping at the first failure.
    pub fn run(&mut self, slots: &[IconSlot]) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();
        for slot in slots {
            tracing::debug!("Rendering slot {} ({}px)", slot.name, slot.size);
            report.written.push(self.create_icon(slot)?);
        }

        self.say(COMPLETE_MESSAGE)?;
        self.say(ADVISORY_MESSAGE)?;
        Ok(report)
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (S, W) {
        (self.sink, self.out)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}").map_err(|source| IconError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::render::CircleRenderer;
    use crate::icon::{default_set, ACCENT, BACKGROUND};
    use crate::sink::{FsSink, MemorySink};

    fn decode(bytes: &[u8]) -> image::RgbaImage {
        image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn test_default_set_in_memory() {
        let renderer = CircleRenderer::default();
        let mut gen = Generator::new(&renderer, MemorySink::default(), Vec::new());
        let report = gen.run(&default_set()).unwrap();
        assert_eq!(report.written.len(), 4);

        let (sink, _) = gen.into_parts();
        for slot in default_set() {
            let img = decode(&sink.files[&slot.file_name]);
            let size = slot.size;
            assert_eq!(img.dimensions(), (size, size));
            assert_eq!(img.get_pixel(0, 0).0, BACKGROUND);
            assert_eq!(img.get_pixel(size - 1, size - 1).0, BACKGROUND);
            assert_eq!(img.get_pixel(size / 2, size / 2).0, ACCENT);
        }
    }

    #[test]
    fn test_same_size_slots_written_separately() {
        let renderer = CircleRenderer::default();
        let mut gen = Generator::new(&renderer, MemorySink::default(), Vec::new());
        gen.run(&default_set()).unwrap();
        let (sink, _) = gen.into_parts();
        assert_eq!(sink.files["128x128@2x.png"], sink.files["icon.png"]);
        assert_eq!(sink.files.len(), 4);
    }

    #[test]
    fn test_console_output() {
        let renderer = CircleRenderer::default();
        let mut gen = Generator::new(&renderer, MemorySink::default(), Vec::new());
        gen.run(&default_set()).unwrap();
        let (_, out) = gen.into_parts();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Created 32x32.png",
                "Created 128x128.png",
                "Created 128x128@2x.png",
                "Created icon.png",
                COMPLETE_MESSAGE,
                ADVISORY_MESSAGE,
            ]
        );
        assert!(ADVISORY_MESSAGE.contains(".icns"));
        assert!(ADVISORY_MESSAGE.contains(".ico"));
    }

    #[test]
    fn test_invalid_slot_stops_run() {
        let renderer = CircleRenderer::default();
        let slots = vec![
            IconSlot::new("ok", 16, "16.png"),
            IconSlot::new("zero", 0, "zero.png"),
            IconSlot::new("after", 16, "after.png"),
        ];
        let mut gen = Generator::new(&renderer, MemorySink::default(), Vec::new());
        let err = gen.run(&slots).unwrap_err();
        assert!(matches!(err, IconError::InvalidSize { .. }));

        let (sink, out) = gen.into_parts();
        assert!(sink.files.contains_key("16.png"));
        assert!(!sink.files.contains_key("after.png"));
        assert!(!String::from_utf8(out).unwrap().contains(COMPLETE_MESSAGE));
    }

    #[test]
    fn test_fs_run_creates_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out").join("icons");
        let sink = FsSink::new(&dir);
        sink.prepare().unwrap();

        let renderer = CircleRenderer::default();
        let mut gen = Generator::new(&renderer, sink, Vec::new());
        gen.run(&default_set()).unwrap();

        for slot in default_set() {
            let img = image::open(dir.join(&slot.file_name)).unwrap().to_rgba8();
            assert_eq!(img.dimensions(), (slot.size, slot.size));
        }
    }

    #[test]
    fn test_fs_runs_are_byte_identical() {
        let tmp = tempfile::tempdir().unwrap();
        let renderer = CircleRenderer::default();

        let mut first = Vec::new();
        for pass in 0..2 {
            let sink = FsSink::new(tmp.path());
            let mut gen = Generator::new(&renderer, sink, Vec::new());
            gen.run(&default_set()).unwrap();
            let contents: Vec<Vec<u8>> = default_set()
                .iter()
                .map(|s| std::fs::read(tmp.path().join(&s.file_name)).unwrap())
                .collect();
            if pass == 0 {
                first = contents;
            } else {
                assert_eq!(first, contents);
            }
        }
    }

    #[test]
    fn test_fs_run_fails_without_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let renderer = CircleRenderer::default();
        let sink = FsSink::new(tmp.path().join("nope"));
        let mut gen = Generator::new(&renderer, sink, Vec::new());
        assert!(matches!(
            gen.run(&default_set()),
            Err(IconError::Write { .. })
        ));
    }
}
