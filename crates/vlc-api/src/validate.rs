//! Pre-flight argument checks. Everything here is pure; a failed check means
//! no request is sent.

use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid play option")]
    InvalidPlayOption,
    #[error("invalid playlist sort mode")]
    InvalidSortMode,
    #[error("invalid volume value")]
    InvalidVolumeValue,
    #[error("invalid seek value")]
    InvalidSeekValue,
    #[error("invalid preamp gain value")]
    InvalidPreampGainValue,
    #[error("invalid playback rate")]
    InvalidPlaybackRate,
    #[error("invalid delay value")]
    InvalidDelayValue,
}

/// Inclusive gain bounds (dB) for the preamp and each equalizer band.
pub const GAIN_RANGE: std::ops::RangeInclusive<i32> = -20..=20;

static RELATIVE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+(%)?$").expect("valid volume pattern"));

static SEEK_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([+-])?(\d+[Hh])?(:)?(\d+[Mm'])?(:\d+([Ss"])?)?$"#)
        .expect("valid seek pattern")
});

/// `+<int>`, `-<int>`, `<int>` or `<int>%`.
pub fn volume(value: &str) -> Result<(), ValidationError> {
    if RELATIVE_NUMBER.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidVolumeValue)
    }
}

/// Either a volume-style number (`1000`, `-10%`) or a duration such as
/// `+1H:2M` or `1h:30m:10s`. An empty value is rejected: it names no
/// position, although the duration pattern alone would match it.
pub fn seek(value: &str) -> Result<(), ValidationError> {
    // The duration pattern is all-optional and would accept "".
    if value.is_empty() {
        return Err(ValidationError::InvalidSeekValue);
    }
    if RELATIVE_NUMBER.is_match(value) || SEEK_DURATION.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSeekValue)
    }
}

pub fn gain(value: i32) -> Result<(), ValidationError> {
    if GAIN_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPreampGainValue)
    }
}

/// Finite and greater than zero. NaN fails the comparison too.
pub fn playback_rate(rate: f64) -> Result<(), ValidationError> {
    if rate > 0.0 && rate.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidPlaybackRate)
    }
}

/// Audio or subtitle delay in seconds; any finite value.
pub fn delay(seconds: f64) -> Result<(), ValidationError> {
    if seconds.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidDelayValue)
    }
}

/// `0` sorts ascending, `1` descending.
pub fn sort_order(id: i64) -> Result<(), ValidationError> {
    match id {
        0 | 1 => Ok(()),
        _ => Err(ValidationError::InvalidSortMode),
    }
}
