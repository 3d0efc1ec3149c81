use tracing::debug;

use crate::error::AgeError;
use crate::table::{AGE_TABLE, SizeCategory};

/// Human-equivalent age for a fractional dog age.
///
/// Checkpoint hits return the tabulated value as is (the 6-month row holds
/// 7.5). Ages between checkpoints are interpolated linearly and ages past the
/// last checkpoint continue along the slope of the last two rows; both of
/// those are rounded half away from zero.
pub fn human_age(total_years: f64, category: SizeCategory) -> f64 {
    if total_years.is_nan() || total_years <= 0.0 {
        return 0.0;
    }

    let col = category.index();
    let (first, last) = match (AGE_TABLE.first(), AGE_TABLE.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return 0.0,
    };

    if total_years >= last.0 {
        return extrapolate(total_years, col);
    }

    let mut lower = first;
    let mut upper = last;
    for &row in AGE_TABLE {
        if row.0 <= total_years {
            lower = row;
        }
        if row.0 >= total_years {
            upper = row;
            break;
        }
    }

    let (x1, y1) = (lower.0, lower.1[col]);
    let (x2, y2) = (upper.0, upper.1[col]);

    if total_years == x1 {
        return y1;
    }
    // Below the first checkpoint both ends land on it.
    if x1 == x2 {
        return y1;
    }

    round_age(y1 + (total_years - x1) * (y2 - y1) / (x2 - x1))
}

/// Same as [`human_age`] for a category token coming from a form or a file.
pub fn human_age_for(total_years: f64, category: &str) -> Result<f64, AgeError> {
    Ok(human_age(total_years, category.parse()?))
}

fn extrapolate(total_years: f64, col: usize) -> f64 {
    let n = AGE_TABLE.len();
    let (prev_age, prev) = AGE_TABLE[n - 2];
    let (last_age, last) = AGE_TABLE[n - 1];
    let rate = (last[col] - prev[col]) / (last_age - prev_age);
    debug!(total_years, rate, "extrapolating past last checkpoint");
    round_age(last[col] + (total_years - last_age) * rate)
}

fn round_age(value: f64) -> f64 {
    value.round().max(0.0)
}
