//! Measure command implementation.
//!
//! Decodes individual images and reports their insets, for checking
//! artwork before it is built into a pack.

use std::path::PathBuf;

use clap::Args;

use crate::catalog::load_png;
use crate::error::Result;
use crate::measure::{InsetDetector, DEFAULT_ALPHA_THRESHOLD};
use crate::output::{display_path, Printer};
use crate::types::PixelBuffer;

/// Print the size and insets of image files
#[derive(Args, Debug)]
pub struct MeasureArgs {
    /// Image files to measure
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Alpha threshold, 0-255
    #[arg(long, default_value_t = DEFAULT_ALPHA_THRESHOLD)]
    pub threshold: u8,
}

/// One measured file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// `None` when no pixel reaches the threshold.
    pub insets: Option<crate::types::Insets>,
}

impl Measurement {
    fn line(&self) -> String {
        let size = format!("{}x{}", self.width, self.height);
        match &self.insets {
            Some(insets) => format!("{}: {} {}", display_path(&self.path), size, insets),
            None => format!("{}: {} no opaque pixels", display_path(&self.path), size),
        }
    }
}

pub fn run(args: MeasureArgs, printer: &Printer) -> Result<()> {
    for measurement in measure_files(&args, printer)? {
        println!("{}", measurement.line());
    }
    Ok(())
}

/// Measure every file, stopping at the first that fails to load.
pub fn measure_files(args: &MeasureArgs, printer: &Printer) -> Result<Vec<Measurement>> {
    let detector = InsetDetector::new(args.threshold);
    args.files
        .iter()
        .map(|path| {
            printer.verbose("Measuring", &display_path(path));
            let buffer = load_png(path)?;
            Ok(measure(path.clone(), &buffer, &detector))
        })
        .collect()
}

fn measure(path: PathBuf, buffer: &PixelBuffer, detector: &InsetDetector) -> Measurement {
    let insets = detector
        .has_opaque(buffer)
        .then(|| detector.detect(buffer));
    Measurement {
        path,
        width: buffer.width(),
        height: buffer.height(),
        insets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Insets;
    use tempfile::tempdir;

    #[test]
    fn test_measure_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");
        let mut img = image::RgbaImage::from_pixel(12, 12, image::Rgba([0, 0, 0, 0]));
        img.put_pixel(3, 4, image::Rgba([0, 0, 0, 255]));
        img.save(&path).unwrap();

        let args = MeasureArgs {
            files: vec![path.clone()],
            threshold: DEFAULT_ALPHA_THRESHOLD,
        };
        let results = measure_files(&args, &Printer::quiet()).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].width, 12);
        assert_eq!(results[0].insets, Some(Insets::new(3, 4, 8, 7)));
        assert!(results[0].line().ends_with("12x12 left 3, top 4, right 8, bottom 7"));
    }

    #[test]
    fn test_measure_blank_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blank.png");
        image::RgbaImage::from_pixel(6, 6, image::Rgba([0, 0, 0, 0]))
            .save(&path)
            .unwrap();

        let args = MeasureArgs {
            files: vec![path],
            threshold: DEFAULT_ALPHA_THRESHOLD,
        };
        let results = measure_files(&args, &Printer::quiet()).unwrap();
        assert_eq!(results[0].insets, None);
        assert!(results[0].line().ends_with("no opaque pixels"));
    }

    #[test]
    fn test_measure_missing_file_fails() {
        let dir = tempdir().unwrap();
        let args = MeasureArgs {
            files: vec![dir.path().join("missing.png")],
            threshold: DEFAULT_ALPHA_THRESHOLD,
        };
        assert!(measure_files(&args, &Printer::quiet()).is_err());
    }
}
