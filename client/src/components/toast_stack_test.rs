use super::*;

#[test]
fn toast_class_marks_kind() {
    assert_eq!(toast_class(NotificationKind::Success), "toast toast--success");
    assert_eq!(toast_class(NotificationKind::Error), "toast toast--error");
}
