//! Number formatting and sample files readable by other implementations
//!
//! Values are printed the way a C or C++ program prints them with `%g`
//! (or an `ostream` with default float formatting): `precision` significant
//! digits, trailing zeros removed, scientific notation with a sign and at
//! least two exponent digits when the exponent is below -4 or not below the
//! precision.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ndarray::Array1;

use crate::error::HarnessError;

// Split Rust's `{:e}` output into mantissa and decimal exponent.
fn split_exp(s: &str) -> (&str, i32) {
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn c_exponent(exp: i32) -> String {
    format!("{}{:02}", if exp < 0 { '-' } else { '+' }, exp.abs())
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("nan".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "inf" } else { "-inf" }.to_string())
    } else {
        None
    }
}

/// `%.<precision>g`
pub fn format_g(value: f64, precision: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s;
    }
    let p = precision.max(1);
    let sci = format!("{:.*e}", p - 1, value);
    let (mantissa, exp) = split_exp(&sci);

    if exp >= -4 && exp < p as i32 {
        let decimals = (p as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    } else {
        format!("{}e{}", trim_fraction(mantissa), c_exponent(exp))
    }
}

/// `%.<precision>E`
pub fn format_e_upper(value: f64, precision: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_uppercase();
    }
    let sci = format!("{:.*e}", precision, value);
    let (mantissa, exp) = split_exp(&sci);
    format!("{}E{}", mantissa, c_exponent(exp))
}

/// Writer of a harness output file
///
/// The first line holds the sample count; vectors and fitness values follow,
/// one number per line.
pub struct SampleWriter {
    path: PathBuf,
    out: BufWriter<File>,
    precision: usize,
}

impl SampleWriter {
    pub fn create(path: &Path, samples: usize, precision: usize) -> Result<Self, HarnessError> {
        log::info!("writing {} samples to {}", samples, path.display());
        let file = File::create(path).map_err(|source| HarnessError::Output {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
            precision,
        };
        writer.line(&samples.to_string())?;
        Ok(writer)
    }

    fn line(&mut self, s: &str) -> Result<(), HarnessError> {
        writeln!(self.out, "{}", s).map_err(|source| HarnessError::Output {
            path: self.path.clone(),
            source,
        })
    }

    pub fn write_value(&mut self, value: f64) -> Result<(), HarnessError> {
        let s = format_g(value, self.precision);
        self.line(&s)
    }

    pub fn write_vector(&mut self, x: &Array1<f64>) -> Result<(), HarnessError> {
        for &v in x.iter() {
            self.write_value(v)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered output
    pub fn finish(mut self) -> Result<PathBuf, HarnessError> {
        self.out.flush().map_err(|source| HarnessError::Output {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_g_matches_printf() {
        // expected strings produced by printf("%.<p>g") with glibc
        let cases: [(f64, usize, &str); 16] = [
            (0.0, 18, "0"),
            (-0.0, 6, "-0"),
            (1.0, 18, "1"),
            (-2.5, 16, "-2.5"),
            (0.1, 18, "0.100000000000000006"),
            (0.1, 16, "0.1"),
            (1.0 / 3.0, 16, "0.3333333333333333"),
            (1e-5, 6, "1e-05"),
            (0.0001, 6, "0.0001"),
            (100000.0, 6, "100000"),
            (1e6, 6, "1e+06"),
            (123456789.0, 6, "1.23457e+08"),
            (9.9999999, 2, "10"),
            (1.5e300, 16, "1.5e+300"),
            (-3.0517578125e-5, 18, "-3.0517578125e-05"),
            (918.75, 18, "918.75"),
        ];
        for (value, precision, expected) in cases {
            assert_eq!(
                format_g(value, precision),
                expected,
                "%.{}g of {:e}",
                precision,
                value
            );
        }
    }

    #[test]
    fn test_format_g_non_finite() {
        assert_eq!(format_g(f64::NAN, 18), "nan");
        assert_eq!(format_g(f64::INFINITY, 18), "inf");
        assert_eq!(format_g(f64::NEG_INFINITY, 18), "-inf");
    }

    #[test]
    fn test_format_e_upper() {
        assert_eq!(
            format_e_upper(f64::EPSILON, 36),
            "2.220446049250313080847263336181640625E-16"
        );
        assert_eq!(format_e_upper(1.0, 2), "1.00E+00");
        assert_eq!(format_e_upper(-12345.0, 1), "-1.2E+04");
    }

    #[test]
    fn test_sample_writer_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut w = SampleWriter::create(&path, 2, 18).unwrap();
        w.write_vector(&Array1::from_vec(vec![0.5, 0.25])).unwrap();
        w.write_value(1.0 / 3.0).unwrap();
        let written = w.finish().unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["2", "0.5", "0.25", "0.333333333333333315"]);
    }
}
