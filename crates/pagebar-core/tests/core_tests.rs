use pagebar_core::{
    DisplayEntry, NavigationGuard, PageIntent, PageWindowPlanner, PaginationConfig,
    PaginationState, ResultRange, ResultSummary, dispatch, result_range, total_pages,
};

fn page(number: usize) -> DisplayEntry {
    DisplayEntry::Page {
        number,
        is_current: false,
    }
}

fn current(number: usize) -> DisplayEntry {
    DisplayEntry::Page {
        number,
        is_current: true,
    }
}

const ELLIPSIS: DisplayEntry = DisplayEntry::Ellipsis;

#[test]
fn test_scenario_short_row() {
    let state = PaginationState::new(2, 3);
    let plan = state.plan(&PageWindowPlanner::new());

    assert_eq!(plan.entries, vec![page(1), current(2), page(3)]);
    assert!(!plan.previous_disabled());
    assert!(!plan.next_disabled());
}

#[test]
fn test_scenario_first_of_ten() {
    let entries = PageWindowPlanner::new().plan(1, 10);
    assert_eq!(entries, vec![current(1), page(2), page(3), ELLIPSIS, page(10)]);
}

#[test]
fn test_scenario_middle_of_ten() {
    let entries = PageWindowPlanner::new().plan(5, 10);
    assert_eq!(
        entries,
        vec![page(1), ELLIPSIS, page(4), current(5), page(6), ELLIPSIS, page(10)]
    );
}

#[test]
fn test_scenario_last_of_ten() {
    let plan = PaginationState::new(10, 10).plan(&PageWindowPlanner::new());
    assert_eq!(
        plan.entries,
        vec![page(1), ELLIPSIS, page(8), page(9), current(10)]
    );
    assert!(plan.next_disabled());
    assert!(!plan.previous_disabled());
}

#[test]
fn test_scenario_range_caption() {
    assert_eq!(
        result_range(3, 25, 9),
        ResultSummary::Showing(ResultRange {
            start_index: 19,
            end_index: 25,
            total_count: 25,
        })
    );
}

#[test]
fn test_scenario_no_pages() {
    let plan = PaginationState::new(1, 0).plan(&PageWindowPlanner::new());
    assert!(plan.is_empty());
    assert_eq!(plan.current_page, 0);
    assert!(plan.previous_disabled());
    assert!(plan.next_disabled());
}

#[test]
fn test_short_rows_list_every_page() {
    let planner = PageWindowPlanner::new();
    for total in 1..=5 {
        for cur in 1..=total {
            let entries = planner.plan(cur, total);
            assert_eq!(entries.len(), total);
            assert!(!entries.iter().any(DisplayEntry::is_ellipsis));
            let numbers: Vec<_> = entries.iter().filter_map(DisplayEntry::page_number).collect();
            assert_eq!(numbers, (1..=total).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_compressed_rows_anchor_edges() {
    let planner = PageWindowPlanner::new();
    for total in 6..=60 {
        for cur in 1..=total {
            let entries = planner.plan(cur, total);

            assert_eq!(entries.first(), Some(&DisplayEntry::page(1, cur)));
            assert_eq!(entries.last(), Some(&DisplayEntry::page(total, cur)));
            assert_eq!(entries.iter().filter(|e| e.is_current()).count(), 1);
            assert!(entries.len() <= planner.max_pages_to_show() + 2);

            let current_number = entries
                .iter()
                .find(|e| e.is_current())
                .and_then(DisplayEntry::page_number);
            assert_eq!(current_number, Some(cur));
        }
    }
}

#[test]
fn test_ellipsis_marks_every_gap() {
    let planner = PageWindowPlanner::new();
    for total in 1..=40 {
        for cur in 1..=total {
            let entries = planner.plan(cur, total);
            for pair in entries.windows(2) {
                match (pair[0].page_number(), pair[1].page_number()) {
                    (Some(a), Some(b)) => assert_eq!(b, a + 1, "gap without ellipsis at {cur}/{total}"),
                    (Some(_), None) => {}
                    (None, Some(_)) => {}
                    (None, None) => panic!("adjacent ellipsis markers at {cur}/{total}"),
                }
            }
            for i in 1..entries.len().saturating_sub(1) {
                if entries[i].is_ellipsis() {
                    let before = entries[i - 1].page_number().unwrap();
                    let after = entries[i + 1].page_number().unwrap();
                    assert!(after > before + 1, "ellipsis without gap at {cur}/{total}");
                }
            }
        }
    }
}

#[test]
fn test_edge_corrections_are_exclusive_in_compressed_mode() {
    for threshold in [3usize, 5, 8] {
        let planner = PageWindowPlanner::with_max_pages(threshold);
        for total in (threshold + 1)..=50 {
            for cur in 1..=total {
                let near_start = cur <= 2;
                let near_end = cur >= total - 1;
                assert!(!(near_start && near_end), "both corrections at {cur}/{total}");

                let entries = planner.plan(cur, total);
                let numbers: Vec<_> = entries.iter().filter_map(DisplayEntry::page_number).collect();
                assert_eq!(numbers.first(), Some(&1));
                assert_eq!(numbers.last(), Some(&total));
                assert!(
                    numbers.windows(2).all(|w| w[0] < w[1]),
                    "pages out of order or repeated at {cur}/{total} (max {threshold}): {numbers:?}"
                );
                assert!(numbers.contains(&cur));

                // One ellipsis per skipped run, and none elsewhere.
                let gaps = numbers.windows(2).filter(|w| w[1] > w[0] + 1).count();
                let markers = entries.iter().filter(|e| e.is_ellipsis()).count();
                assert_eq!(gaps, markers, "ellipsis mismatch at {cur}/{total} (max {threshold})");
                for pair in entries.windows(2) {
                    if let (Some(a), Some(b)) = (pair[0].page_number(), pair[1].page_number()) {
                        assert_eq!(b, a + 1, "gap without ellipsis at {cur}/{total} (max {threshold})");
                    }
                }
            }
        }
    }
}

#[test]
fn test_planner_is_idempotent() {
    let planner = PageWindowPlanner::new();
    for (cur, total) in [(1, 10), (5, 10), (10, 10), (2, 3), (1, 0), (17, 99)] {
        assert_eq!(planner.plan(cur, total), planner.plan(cur, total));
    }
}

#[test]
fn test_range_invariant() {
    for per_page in 1..=12 {
        for count in 1..=80 {
            let pages = total_pages(count, per_page);
            for cur in 1..=pages {
                let range = result_range(cur, count, per_page)
                    .range()
                    .expect("non-empty count yields a range");
                assert!(1 <= range.start_index);
                assert!(range.start_index <= range.end_index);
                assert!(range.end_index <= count);
                assert_eq!(range.total_count, count);
            }
        }
    }
}

#[test]
fn test_empty_count_is_not_a_zero_range() {
    let summary = result_range(1, 0, 9);
    assert!(summary.is_empty());
    assert_eq!(summary.range(), None);
    assert_eq!(summary.to_string(), "No results found");
}

#[test]
fn test_navigation_walk() {
    let state = PaginationState::from_total_count(1, 95, 9);
    assert_eq!(state.total_pages, 11);

    let mut page = state.current_page;
    let mut visited = vec![page];
    while let Some(next) = PageIntent::Next.resolve(page, state.total_pages) {
        page = next;
        visited.push(page);
    }

    assert_eq!(visited, (1..=11).collect::<Vec<_>>());
    assert_eq!(
        NavigationGuard::new(page, state.total_pages),
        NavigationGuard {
            previous_disabled: false,
            next_disabled: true,
        }
    );
}

#[test]
fn test_dispatch_with_host_state() {
    let mut state = PaginationState::from_total_count(2, 40, 9);
    let total = state.total_pages;
    let cur = state.current_page;

    let mut apply = |target: usize| state.current_page = target;
    dispatch(PageIntent::Last, cur, total, &mut apply);

    assert_eq!(state.current_page, 5);
    assert_eq!(state.summary().to_string(), "Showing 37 to 40 of 40 results");
}

#[test]
fn test_config_drives_planner() {
    let config = PaginationConfig::builder()
        .max_pages_to_show(7usize)
        .items_per_page(20usize)
        .build()
        .unwrap();

    let planner = config.planner();
    assert_eq!(planner.plan(4, 7).len(), 7);
    assert_eq!(planner.plan(4, 8).len(), 7);

    let state = PaginationState::from_total_count(1, 41, config.items_per_page);
    assert_eq!(state.total_pages, 3);
}

#[test]
fn test_plan_json_shape() {
    let plan = PaginationState::new(1, 10).plan(&PageWindowPlanner::new());
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["current_page"], 1);
    assert_eq!(json["previous_disabled"], true);
    assert_eq!(json["next_disabled"], false);
    assert_eq!(json["entries"][0]["kind"], "page");
    assert_eq!(json["entries"][0]["is_current"], true);
    assert_eq!(json["entries"][3]["kind"], "ellipsis");
}

#[test]
fn test_config_from_partial_json() {
    let config: PaginationConfig = serde_json::from_str(r#"{"items_per_page": 12}"#).unwrap();
    assert_eq!(config.items_per_page, 12);
    assert_eq!(config.max_pages_to_show, 5);
    assert!(config.validate().is_ok());
}
