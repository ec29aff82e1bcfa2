use crate::robot::StackRobot;
use crate::robot_assertions::{
    assert_approx_eq, assert_card_collapsed, assert_card_expanded, assert_card_in_transition,
};
use stackpose_ui::{StackItem, StackMetrics, WidgetStack};

fn widget_stack(count: usize) -> WidgetStack<()> {
    let items = (0..count)
        .map(|index| StackItem::new(format!("widget {index}"), ()))
        .collect();
    WidgetStack::new(items, StackMetrics::default(), 800.0)
}

#[test]
fn robot_can_drag_and_read_visuals() {
    let mut robot = StackRobot::launch(widget_stack(10));

    robot.press(180.0, 500.0);
    robot.drag_by(-300.0, 10);
    assert!(robot.release(), "drag release should be consumed");

    assert_approx_eq(robot.location(), 300.0, 0.01, "committed location");

    let snapshot = robot.snapshot();
    assert_card_collapsed(snapshot.card(0), "first card after a long scroll");
    assert_card_in_transition(snapshot.card(1), "second card");
    assert_card_expanded(snapshot.card(3), "card still below the fold");
}

#[test]
fn robot_tap_does_not_scroll() {
    let mut robot = StackRobot::launch(widget_stack(10));

    robot.press(180.0, 500.0);
    assert!(!robot.release(), "tap release must not be consumed");
    assert_eq!(robot.location(), 0.0);
}

#[test]
fn robot_overscroll_settles_back_to_top() {
    let mut robot = StackRobot::launch(widget_stack(10));

    robot.press(180.0, 200.0);
    robot.drag_by(120.0, 8);
    assert!(robot.snapshot().stack_translate() > 0.0);
    robot.release();

    let frames = robot.pump_until_idle(2_000);
    assert!(frames > 1, "settle should take multiple frames");
    assert_eq!(robot.location(), 0.0);
    assert_eq!(robot.snapshot().stack_translate(), 0.0);
}

#[test]
fn robot_cancel_leaves_the_stack_where_it_was() {
    let mut robot = StackRobot::launch(widget_stack(10));

    robot.press(180.0, 500.0);
    robot.drag_by(-80.0, 4);
    assert!(robot.location() > 0.0);
    robot.cancel();
    assert_eq!(robot.location(), 0.0);
}

#[test]
fn robot_snapshot_covers_every_card() {
    let robot = StackRobot::launch(widget_stack(7));
    assert_eq!(robot.snapshot().cards().len(), 7);
}
