// Benchmark for drop handling
// Measures a schedule/unschedule round trip as the task list grows

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use day_planner::models::drop_target::DropTarget;
use day_planner::models::settings::SchedulerSettings;
use day_planner::models::task::Task;
use day_planner::models::todo_list::TodoList;
use day_planner::services::ids::SequentialIdGenerator;
use day_planner::services::placement::{Placement, PlacementEngine, Transition};

fn placement_with(tasks: usize) -> Placement {
    let tasks = (0..tasks)
        .map(|i| Task::new(i.to_string(), format!("Task {i}"), "1").unwrap())
        .collect();
    Placement::new(tasks, Vec::new())
}

fn bench_round_trip(c: &mut Criterion) {
    let lists = vec![TodoList::new("1", "Personal Tasks", "#3B82F6")];
    let settings = SchedulerSettings::default();
    let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    let engine = PlacementEngine::new(&lists, &settings, day);
    let slot = DropTarget::time_slot(9, 30);
    let list = DropTarget::list("1");

    let mut group = c.benchmark_group("drop_round_trip");
    for size in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut ids = SequentialIdGenerator::new();
            let mut placement = placement_with(size);
            b.iter(|| {
                let (scheduled, transition) =
                    engine.apply_drop(black_box("0"), Some(&slot), placement.clone(), &mut ids);
                let Transition::Scheduled { event_id, .. } = transition else {
                    unreachable!("task 0 is always unscheduled here");
                };
                let (restored, _) = engine.apply_drop(&event_id, Some(&list), scheduled, &mut ids);
                placement = black_box(restored);
            });
        });
    }
    group.finish();
}

fn bench_tag_parsing(c: &mut Criterion) {
    c.bench_function("parse_drop_target", |b| {
        b.iter(|| black_box("time-14-45").parse::<DropTarget>())
    });
}

criterion_group!(benches, bench_round_trip, bench_tag_parsing);
criterion_main!(benches);
