use super::*;

#[test]
fn summary_line_reports_completed_of_total() {
    assert_eq!(summary_line(TaskSummary { total: 3, completed: 1, incomplete: 2 }), "1 of 3 done");
    assert_eq!(summary_line(TaskSummary { total: 2, completed: 2, incomplete: 0 }), "2 of 2 done");
}

#[test]
fn summary_line_handles_empty_list() {
    assert_eq!(summary_line(TaskSummary::default()), "No tasks");
}

#[test]
fn empty_message_depends_on_filter() {
    assert_eq!(empty_message(StatusFilter::All), "No tasks yet.");
    assert_eq!(empty_message(StatusFilter::Incomplete), "Nothing left to do.");
    assert_eq!(empty_message(StatusFilter::Completed), "No completed tasks.");
}
