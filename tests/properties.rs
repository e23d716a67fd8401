use julian_day::{
    DAYS_PER_CYCLE, DateTimeFields, DayBoundary, ExtendedDate, days_in_month, fields_to_fracdays,
    fields_to_seconds, fracdays_to_fields, is_leap_year, julian_to_ymd, seconds_to_fields,
    ymd_to_days, ymd_to_julian,
};

const YEARS: &[i64] = &[
    -3_999_999_997,
    -1_000_000,
    -50_000,
    -4713,
    -401,
    -400,
    -1,
    0,
    1,
    399,
    400,
    1582,
    1970,
    2000,
    9999,
    10_000,
    10_001,
    123_456,
    12_345_678,
];

#[test]
fn calendar_roundtrip_wide_years() {
    for &year in YEARS {
        for month in 1..=12 {
            for day in 1..=days_in_month(year, month).unwrap() {
                let jd = ymd_to_julian(year, month, day).unwrap();
                assert_eq!(
                    julian_to_ymd(jd).unwrap(),
                    (year, month, day),
                    "roundtrip failed for {year}-{month}-{day} (jd {jd})"
                );
            }
        }
    }
}

#[test]
fn julian_day_roundtrip() {
    let mut samples: Vec<i64> = (-1000..=1000).collect();
    samples.extend((-50..=50).map(|k| k * 7_919_873 + 2_440_588));
    samples.extend([
        i64::from(i32::MIN),
        i64::from(i32::MAX),
        -1_000_000_000_000,
        1_000_000_000_000,
    ]);

    for jd in samples {
        let (y, m, d) = julian_to_ymd(jd).unwrap();
        assert_eq!(ymd_to_julian(y, m, d).unwrap(), jd, "jd {jd} -> {y}-{m}-{d}");
    }
}

#[test]
fn consecutive_julian_days_are_consecutive_dates() {
    let start = ymd_to_julian(-801, 12, 25).unwrap();
    let mut previous = ExtendedDate::new(-801, 12, 25).unwrap();
    for offset in 1..(3 * DAYS_PER_CYCLE / 400 * 4) {
        let (y, m, d) = julian_to_ymd(start + offset).unwrap();
        let current = ExtendedDate::new(y, m, d).unwrap();
        assert_eq!(current.days_since(previous).unwrap(), 1, "at {current}");
        previous = current;
    }
}

#[test]
fn unix_epoch_fix_point() {
    assert_eq!(ymd_to_julian(1970, 1, 1).unwrap(), 2_440_588);
    assert_eq!(ymd_to_days(1970, 1, 1).unwrap(), 2_440_588);
}

#[test]
fn cycle_consistency() {
    for &year in YEARS {
        for (month, day) in [(1, 1), (2, 28), (3, 1), (12, 31)] {
            let base = ymd_to_julian(year, month, day).unwrap();
            for k in [-3_i64, -1, 1, 2, 1000] {
                let shifted = ymd_to_julian(year + 400 * k, month, day).unwrap();
                assert_eq!(
                    shifted - base,
                    k * DAYS_PER_CYCLE,
                    "{year}-{month}-{day} shifted by {k} cycles"
                );
            }
        }
    }
}

#[test]
fn leap_day_exists_exactly_in_leap_years() {
    let mut years: Vec<i64> = (-820..=820).collect();
    years.extend(YEARS);
    years.extend([-3_999_999_996, -3_999_999_900, -4_000_000_000, 9_999_999_600]);

    for year in years {
        assert_eq!(
            ExtendedDate::new(year, 2, 29).is_ok(),
            is_leap_year(year),
            "year {year}"
        );
    }
}

#[test]
fn far_past_leap_year_matches_reduced_year() {
    // -3999999997 sits at the same position of the 400-year cycle as 3
    let far = -3_999_999_997_i64;
    let reduced = far.rem_euclid(400);
    assert_eq!(reduced, 3);
    assert_eq!(
        ExtendedDate::new(far, 2, 29).is_ok(),
        ExtendedDate::new(reduced, 2, 29).is_ok()
    );
    assert_eq!(
        ExtendedDate::new(far, 3, 1).unwrap().weekday(),
        ExtendedDate::new(reduced, 3, 1).unwrap().weekday()
    );
}

#[test]
fn seconds_zero_decomposes_to_julian_day_zero() {
    let fields = seconds_to_fields(0, DayBoundary::Midnight).unwrap();
    assert_eq!(fields.ymd(), julian_to_ymd(0).unwrap());
    assert_eq!((fields.hour, fields.minute, fields.second), (0, 0, 0));
}

#[test]
fn astro_offset_shifts_sub_day_scalars_only() {
    let seconds_fields = DateTimeFields::new(-50_000, 6, 15, 9, 45, 30);
    let civil = fields_to_seconds(&seconds_fields, DayBoundary::Midnight).unwrap();
    let astro = fields_to_seconds(&seconds_fields, DayBoundary::Noon).unwrap();
    assert_eq!(civil - astro, 43_200);

    let frac_fields = DateTimeFields::new(2024, 6, 15, 9, 45, 30.0);
    let civil = fields_to_fracdays(&frac_fields, DayBoundary::Midnight).unwrap();
    let astro = fields_to_fracdays(&frac_fields, DayBoundary::Noon).unwrap();
    assert_eq!(civil - astro, 0.5);

    let back = fracdays_to_fields(astro, DayBoundary::Noon).unwrap();
    assert_eq!(back.ymd(), (2024, 6, 15));
    assert_eq!((back.hour, back.minute), (9, 45));
    assert!((back.second - 30.0).abs() < 1e-3);
}

#[test]
fn seconds_roundtrip_with_both_boundaries() {
    for boundary in [DayBoundary::Midnight, DayBoundary::Noon] {
        for &year in YEARS {
            let fields = DateTimeFields::new(year, 2, 28, 23, 59, 59);
            let seconds = fields_to_seconds(&fields, boundary).unwrap();
            assert_eq!(seconds_to_fields(seconds, boundary).unwrap(), fields);
        }
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(ymd_to_days(1970, 1, 1).unwrap(), 2_440_588);
    assert_eq!(julian_to_ymd(2_440_588).unwrap(), (1970, 1, 1));
    assert_eq!(
        fields_to_seconds(
            &DateTimeFields::new(1970, 1, 1, 0, 0, 0),
            DayBoundary::Midnight
        )
        .unwrap(),
        210_866_803_200
    );
    assert_eq!(
        fields_to_fracdays(
            &DateTimeFields::new(1970, 1, 1, 12, 0, 0.0),
            DayBoundary::Midnight
        )
        .unwrap()
        .to_string(),
        "2440588.5"
    );
}
