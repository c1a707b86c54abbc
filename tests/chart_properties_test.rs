use read_my_chart::{generate_chart_insights, BirthForm, ChartInsights, Element, ZODIAC};

fn sample_forms() -> Vec<BirthForm> {
    let dates = [
        "1901-01-01",
        "1969-07-20",
        "1985-11-02",
        "1990-03-21",
        "1999-12-31",
        "2000-02-29",
        "2012-06-15",
        "2023-09-30",
    ];
    let times = [None, Some("00:00"), Some("06:45"), Some("12:00"), Some("23:59")];
    let locations = [None, Some("Lisbon, Portugal"), Some("10.522, 76.172"), Some("  ")];

    let mut forms = Vec::new();
    for date in dates {
        for time in times {
            for location in locations {
                let mut form = BirthForm::new(date).with_name("Sky");
                form.birth_time = time.map(str::to_string);
                form.location = location.map(str::to_string);
                forms.push(form);
            }
        }
    }
    forms
}

fn read(form: &BirthForm) -> ChartInsights {
    generate_chart_insights(form).unwrap()
}

#[test]
fn test_repeated_reads_are_identical() {
    for form in sample_forms() {
        let first = read(&form);
        let second = read(&form);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn test_every_degree_in_range() {
    for form in sample_forms() {
        let insights = read(&form);
        for degree in [insights.sun.degree, insights.moon.degree, insights.rising.degree] {
            assert!((0.0..30.0).contains(&degree), "{:?} -> {}", form, degree);
        }
    }
}

#[test]
fn test_houses_are_a_rotation_of_the_wheel() {
    for form in sample_forms() {
        let insights = read(&form);
        assert_eq!(insights.houses.len(), 12);
        assert_eq!(insights.houses[0].sign, insights.rising.sign);

        for (offset, house) in insights.houses.iter().enumerate() {
            assert_eq!(house.number as usize, offset + 1);
            assert_eq!(
                house.sign,
                ZODIAC[(insights.rising.sign.index + offset) % 12]
            );
        }

        let mut names: Vec<&str> = insights.houses.iter().map(|h| h.sign.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }
}

#[test]
fn test_dominant_element_is_consistent_with_placements() {
    let priority = [Element::Fire, Element::Earth, Element::Air, Element::Water];
    for form in sample_forms() {
        let insights = read(&form);
        let elements = [
            insights.sun.sign.element,
            insights.moon.sign.element,
            insights.rising.sign.element,
        ];
        let count = |e: Element| elements.iter().filter(|x| **x == e).count() as f64;

        let pulse = &insights.dominant_element;
        assert!(priority.contains(&pulse.element));
        assert!(pulse.score >= 1.0 && pulse.score <= 3.0);
        assert_eq!(pulse.score, count(pulse.element));

        for other in priority {
            assert!(count(other) <= pulse.score);
            if count(other) == pulse.score && other != pulse.element {
                let winner = priority.iter().position(|e| *e == pulse.element);
                let loser = priority.iter().position(|e| *e == other);
                assert!(winner < loser, "tie must go to the earlier element");
            }
        }
    }
}

#[test]
fn test_text_sections_have_fixed_sizes() {
    for form in sample_forms() {
        let insights = read(&form);
        assert_eq!(insights.summary.len(), 4);
        assert_eq!(insights.rituals.len(), 3);
        assert_eq!(insights.transits.len(), 3);

        let mut rituals = insights.rituals.clone();
        rituals.sort_unstable();
        rituals.dedup();
        assert_eq!(rituals.len(), 3);

        assert!(insights
            .summary
            .iter()
            .all(|line| !line.is_empty() && !line.contains('{')));
        assert!(insights
            .transits
            .iter()
            .all(|t| t.description.contains(insights.sun.sign.name)));
    }
}

#[test]
fn test_moon_varies_with_time_but_sun_does_not() {
    let morning = read(&BirthForm::new("1990-03-21").with_time("06:00"));
    let readings: Vec<ChartInsights> = ["06:01", "06:02", "06:03", "06:04", "06:05"]
        .iter()
        .map(|t| read(&BirthForm::new("1990-03-21").with_time(*t)))
        .collect();

    assert!(readings.iter().all(|r| r.sun == morning.sun));
    assert!(readings.iter().any(|r| r.moon != morning.moon));
}
