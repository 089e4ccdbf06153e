//! Tests for the brightness fallback chain and controller, using fake backends.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use brightbar::error::{BrightnessError, Result};
use brightbar::{BrightnessAccessor, BrightnessBackend, BrightnessController, DisplayId, Percent};

/// Backend that records every call into a shared log.
struct Recording {
    name: &'static str,
    works: bool,
    value: Rc<Cell<f32>>,
    log: Rc<RefCell<Vec<String>>>,
}

impl Recording {
    fn boxed(
        name: &'static str,
        works: bool,
        value: &Rc<Cell<f32>>,
        log: &Rc<RefCell<Vec<String>>>,
    ) -> Box<dyn BrightnessBackend> {
        Box::new(Recording {
            name,
            works,
            value: value.clone(),
            log: log.clone(),
        })
    }
}

impl BrightnessBackend for Recording {
    fn name(&self) -> &'static str {
        self.name
    }

    fn get(&self, display: DisplayId) -> Result<f32> {
        self.log.borrow_mut().push(format!("get {} {}", self.name, display.0));
        if self.works {
            Ok(self.value.get())
        } else {
            Err(BrightnessError::SymbolMissing("get"))
        }
    }

    fn set(&self, display: DisplayId, value: f32) -> Result<()> {
        self.log
            .borrow_mut()
            .push(format!("set {} {} {}", self.name, display.0, value));
        if self.works {
            self.value.set(value);
            Ok(())
        } else {
            Err(BrightnessError::SymbolMissing("set"))
        }
    }
}

fn setup(works: [bool; 3]) -> (BrightnessAccessor, Rc<Cell<f32>>, Rc<RefCell<Vec<String>>>) {
    let value = Rc::new(Cell::new(0.5));
    let log = Rc::new(RefCell::new(Vec::new()));
    let backends = vec![
        Recording::boxed("private", works[0], &value, &log),
        Recording::boxed("linear", works[1], &value, &log),
        Recording::boxed("iokit", works[2], &value, &log),
    ];
    (BrightnessAccessor::new(DisplayId(7), backends), value, log)
}

#[test]
fn first_working_backend_wins() {
    let (mut acc, _, log) = setup([true, true, true]);
    acc.read().unwrap();
    assert_eq!(*log.borrow(), vec!["get private 7"]);
    assert_eq!(acc.last_backend(), Some("private"));
}

#[test]
fn fallback_follows_declared_order() {
    let (mut acc, _, log) = setup([false, false, true]);
    acc.read().unwrap();
    assert_eq!(
        *log.borrow(),
        vec!["get private 7", "get linear 7", "get iokit 7"]
    );
    assert_eq!(acc.last_backend(), Some("iokit"));
}

#[test]
fn total_failure_collects_every_backend_error() {
    let (mut acc, _, _) = setup([false, false, false]);
    match acc.read() {
        Err(BrightnessError::AllBackendsFailed(failures)) => {
            let names: Vec<_> = failures.iter().map(|(n, _)| *n).collect();
            assert_eq!(names, vec!["private", "linear", "iokit"]);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn write_then_read_round_trips() {
    let (mut acc, _, _) = setup([false, true, true]);
    acc.write(Percent::new(30.0)).unwrap();
    let p = acc.read().unwrap();
    assert!((p.value() - 30.0).abs() < 1e-4);
    assert_eq!(acc.last_backend(), Some("linear"));
}

#[test]
fn hardware_values_outside_unit_range_are_clamped() {
    let (mut acc, value, _) = setup([true, true, true]);
    value.set(1.4);
    assert_eq!(acc.read().unwrap(), Percent::MAX);
    value.set(-0.2);
    assert_eq!(acc.read().unwrap(), Percent::MIN);
}

#[test]
fn backend_names_in_order() {
    let (acc, _, _) = setup([true, true, true]);
    assert_eq!(acc.backend_names(), vec!["private", "linear", "iokit"]);
}

#[test]
fn unavailable_hardware_leaves_control_disabled() {
    let (acc, value, _) = setup([false, false, false]);
    let mut controller = BrightnessController::new(acc);
    controller.refresh();
    assert!(!controller.state().is_enabled());

    controller.set(Percent::new(90.0));
    assert_eq!(value.get(), 0.5);
    assert!(!controller.state().is_enabled());
}

#[test]
fn controller_follows_display_change() {
    let (acc, _, log) = setup([true, true, true]);
    let mut controller = BrightnessController::new(acc);
    controller.set_display(DisplayId(2));
    controller.refresh();
    assert_eq!(log.borrow().last().unwrap(), "get private 2");
    assert_eq!(controller.accessor().display(), DisplayId(2));
}
