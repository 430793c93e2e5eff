use crate::types::{PersonalRecord, VolumePoint};

/// Drop the decimals when the weight is whole: 100.0 -> "100", 62.5 -> "62.5".
pub fn format_weight(w: f64) -> String {
    if w.fract() == 0.0 { format!("{:.0}", w) }
    else { format!("{:.1}", w) }
}

/// Difference shown under a PR card, e.g. "+5 kg". `None` when unchanged.
pub fn record_delta(record: &PersonalRecord) -> Option<String> {
    let diff = record.current - record.previous;
    if diff == 0.0 {
        return None;
    }
    let sign = if diff > 0.0 { "+" } else { "-" };
    Some(format!("{}{} {}", sign, format_weight(diff.abs()), record.unit))
}

/// Height of each bar as a percentage of the tallest one.
pub fn volume_bar_heights(points: &[VolumePoint]) -> Vec<u8> {
    let max = points.iter().map(|p| p.volume).fold(0.0, f64::max);
    if max <= 0.0 {
        return vec![0; points.len()];
    }
    points
        .iter()
        .map(|p| ((p.volume.max(0.0) / max) * 100.0).round() as u8)
        .collect()
}

/// "21.3k" style label for bar tooltips.
pub fn format_volume(volume: f64) -> String {
    if volume >= 1000.0 {
        format!("{:.1}k", volume / 1000.0)
    } else {
        format_weight(volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(volume: f64) -> VolumePoint {
        VolumePoint { label: String::new(), volume }
    }

    fn record(current: f64, previous: f64) -> PersonalRecord {
        PersonalRecord { lift: "Bench Press".into(), current, previous, unit: "kg".into() }
    }

    #[test]
    fn weight_formatting() {
        assert_eq!(format_weight(100.0), "100");
        assert_eq!(format_weight(62.5), "62.5");
    }

    #[test]
    fn delta_sign_and_unit() {
        assert_eq!(record_delta(&record(100.0, 95.0)).as_deref(), Some("+5 kg"));
        assert_eq!(record_delta(&record(90.0, 92.5)).as_deref(), Some("-2.5 kg"));
        assert_eq!(record_delta(&record(60.0, 60.0)), None);
    }

    #[test]
    fn bars_scale_to_the_maximum() {
        let heights = volume_bar_heights(&[point(50.0), point(100.0), point(25.0)]);
        assert_eq!(heights, vec![50, 100, 25]);
    }

    #[test]
    fn empty_or_zero_series_is_flat() {
        assert!(volume_bar_heights(&[]).is_empty());
        assert_eq!(volume_bar_heights(&[point(0.0), point(0.0)]), vec![0, 0]);
    }

    #[test]
    fn volume_labels() {
        assert_eq!(format_volume(21300.0), "21.3k");
        assert_eq!(format_volume(850.0), "850");
    }
}
