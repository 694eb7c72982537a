#![forbid(unsafe_code)]
use creneaux::{
    allocate, parse_clock,
    report::{format_hour, format_time_ranges},
    shortfalls, AllocOptions, AllocationRenderer, HoursTarget, StaffRequirement, TextReport,
    Worker,
};

fn worker(name: &str, start: &str, end: &str, target: HoursTarget) -> Worker {
    Worker::new(name, parse_clock(start).unwrap(), parse_clock(end).unwrap())
        .unwrap()
        .with_target(target)
}

#[test]
fn hour_labels() {
    assert_eq!(format_hour(6), "6:00");
    assert_eq!(format_hour(22), "22:00");
}

#[test]
fn consecutive_hours_fold_into_ranges() {
    assert_eq!(format_time_ranges(&[]), "none");
    assert_eq!(format_time_ranges(&[13]), "13:00");
    assert_eq!(format_time_ranges(&[9, 10, 11, 14]), "9:00-12:00, 14:00");
    assert_eq!(format_time_ranges(&[14, 9, 10]), "9:00-11:00, 14:00");
}

#[test]
fn shortfalls_list_understaffed_hours() {
    let a = worker("A", "9:00", "11:00", HoursTarget::Unconstrained);
    let reqs = [StaffRequirement::new(9, 12, 2).unwrap()];
    let opts = AllocOptions {
        first_hour: 8,
        last_hour: 12,
    };
    let alloc = allocate(&[a], &reqs, opts);

    let missing = shortfalls(&alloc);
    let hours: Vec<(u8, u32, usize)> = missing
        .iter()
        .map(|s| (s.hour, s.required, s.assigned))
        .collect();
    assert_eq!(hours, vec![(9, 2, 1), (10, 2, 1), (11, 2, 0)]);
}

#[test]
fn text_report() {
    let alice = worker("Alice", "9:00", "11:00", HoursTarget::Targeted(2.0));
    let bob = worker("Bob", "10:00", "12:00", HoursTarget::Unconstrained);
    let opts = AllocOptions {
        first_hour: 9,
        last_hour: 11,
    };
    let alloc = allocate(&[alice, bob], &[StaffRequirement::new(9, 12, 1).unwrap()], opts);

    insta::assert_snapshot!(TextReport.render(&alloc), @r"
    9:00 | Alice | 1/1
    10:00 | Alice | 1/1
    11:00 | Bob | 1/1
    [ok] Alice 2h/2h : 9:00-11:00
    [ok] Bob 1h : 11:00
    ");
}

#[test]
fn text_report_flags_short_hours_and_missed_targets() {
    let carol = worker("Carol", "9:00", "10:00", HoursTarget::Targeted(3.0));
    let opts = AllocOptions {
        first_hour: 9,
        last_hour: 10,
    };
    let alloc = allocate(&[carol], &[StaffRequirement::new(9, 11, 2).unwrap()], opts);
    let text = TextReport.render(&alloc);

    assert!(text.contains("9:00 | Carol | 1/2 (short)"));
    assert!(text.contains("10:00 | - | 0/2 (short)"));
    assert!(text.contains("[KO] Carol 1h/3h : 9:00"));
}
