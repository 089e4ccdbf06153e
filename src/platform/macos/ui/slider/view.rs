//! BrightnessSliderView: the NSView subclass living in the status item.
//!
//! This class handles:
//! - Drawing the slider from the cached brightness
//! - Mouse drag / scroll input, written synchronously to the display
//! - The poll timer tick (event dispatch + brightness re-read)
//! - Status menu actions

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};

use crate::events::{publish, AppEvent};
use crate::platform::macos::app::with_state;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, Bool, NSApp, NSPoint, NSRect, NSSize,
    ObjectExt, YES,
};
use crate::platform::macos::handlers::dispatch_events;
use crate::platform::macos::ui::slider::drawing::{draw_slider, SliderPaint};
use crate::platform::macos::ui::status_bar::update_status_menu;
use crate::slider::SliderGeometry;

/// NSEventModifierFlagControl
const MODIFIER_CONTROL: u64 = 1 << 18;

// ============================================================================
// Class registration and creation
// ============================================================================

/// Register the BrightnessSliderView class (once) and create an instance.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_slider_view(width: f64, height: f64) -> id {
    let class_name = c"BrightnessSliderView";
    let cls = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = get_class("NSView");
        let Some(mut builder) = ClassBuilder::new(class_name, superclass) else {
            return nil;
        };
        register_ivars(&mut builder);
        register_methods(&mut builder);
        builder.register()
    };

    let view: id = msg_send![cls, alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(width, height));
    let view: id = msg_send![view, initWithFrame: frame];

    (*view).store_ivar::<id>("_statusItem", nil);
    (*view).store_ivar::<id>("_menu", nil);
    (*view).store_ivar::<id>("_headerItem", nil);
    (*view).store_ivar::<id>("_nightShiftItem", nil);
    (*view).store_ivar::<id>("_pollTimer", nil);

    view
}

unsafe fn register_ivars(builder: &mut ClassBuilder) {
    builder.add_ivar::<id>(c"_statusItem");
    builder.add_ivar::<id>(c"_menu");
    builder.add_ivar::<id>(c"_headerItem"); // "Brightness: 42%"
    builder.add_ivar::<id>(c"_nightShiftItem"); // nil when unavailable
    builder.add_ivar::<id>(c"_pollTimer");
}

unsafe fn register_methods(builder: &mut ClassBuilder) {
    // Drawing
    builder.add_method(
        sel!(drawRect:),
        draw_rect as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Input
    builder.add_method(
        sel!(acceptsFirstMouse:),
        accepts_first_mouse as unsafe extern "C-unwind" fn(_, _, _) -> _,
    );
    builder.add_method(
        sel!(mouseDown:),
        mouse_down as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(mouseDragged:),
        mouse_dragged as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(mouseUp:),
        mouse_up as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(rightMouseDown:),
        right_mouse_down as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(scrollWheel:),
        scroll_wheel as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Timer
    builder.add_method(
        sel!(pollTick),
        poll_tick as unsafe extern "C-unwind" fn(_, _),
    );

    // Status menu actions
    builder.add_method(
        sel!(toggleNightShift:),
        toggle_night_shift as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(showAbout:),
        show_about as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(quitApp:),
        quit_app as unsafe extern "C-unwind" fn(_, _, _),
    );
}

/// Start the repeating poll timer on `view`.
///
/// Added in common modes so the slider keeps updating while a menu is open.
///
/// # Safety
/// `view` must be a BrightnessSliderView. Main thread only.
pub unsafe fn schedule_poll_timer(view: id, interval: f64) {
    let prev: id = *(*view).load_ivar::<id>("_pollTimer");
    if prev != nil {
        let _: () = msg_send![prev, invalidate];
        (*view).store_ivar::<id>("_pollTimer", nil);
    }
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: interval,
        target: view,
        selector: sel!(pollTick),
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let _: () = msg_send![run_loop, addTimer: timer, forMode: nsstring_id("kCFRunLoopCommonModes")];

    (*view).store_ivar::<id>("_pollTimer", timer);
}

// ============================================================================
// Helpers
// ============================================================================

unsafe fn geometry_of(view: id) -> SliderGeometry {
    let bounds: NSRect = msg_send![view, bounds];
    SliderGeometry::new(bounds.size.width, bounds.size.height)
}

unsafe fn location_x(view: id, event: id) -> f64 {
    let in_window: NSPoint = msg_send![event, locationInWindow];
    let local: NSPoint = msg_send![view, convertPoint: in_window, fromView: nil];
    local.x
}

unsafe fn redraw(view: id) {
    let _: () = msg_send![view, setNeedsDisplay: YES];
    let _: () = msg_send![view, displayIfNeeded];
}

/// Write the brightness under the cursor.
unsafe fn set_from_event(view: id, event: id) {
    let percent = geometry_of(view).percent_at(location_x(view, event));
    with_state(|s| s.brightness.set(percent));
    redraw(view);
}

unsafe fn show_menu(view: id) {
    let menu: id = *(*view).load_ivar::<id>("_menu");
    if menu == nil {
        return;
    }
    with_state(|s| s.refresh_night_shift());
    update_status_menu(view);
    // Runs a nested tracking loop; no state borrow may be held here.
    let _: Bool = msg_send![
        menu,
        popUpMenuPositioningItem: nil,
        atLocation: NSPoint::new(0.0, 0.0),
        inView: view
    ];
}

// ============================================================================
// Methods (extern "C-unwind" for Objective-C runtime)
// ============================================================================

unsafe extern "C-unwind" fn draw_rect(this: &mut AnyObject, _cmd: Sel, _dirty: NSRect) {
    let view = this as *mut _ as id;
    let percent = with_state(|s| s.brightness.state().percent).flatten();
    let paint = SliderPaint::new(&geometry_of(view), percent);
    draw_slider(&paint);
}

unsafe extern "C-unwind" fn accepts_first_mouse(
    _this: &mut AnyObject,
    _cmd: Sel,
    _event: id,
) -> Bool {
    YES
}

unsafe extern "C-unwind" fn mouse_down(this: &mut AnyObject, _cmd: Sel, event: id) {
    let view = this as *mut _ as id;
    let flags: u64 = msg_send![event, modifierFlags];
    if flags & MODIFIER_CONTROL != 0 {
        show_menu(view);
        return;
    }

    let enabled = with_state(|s| {
        let enabled = s.brightness.state().is_enabled();
        if enabled {
            s.brightness.begin_drag();
        }
        enabled
    })
    .unwrap_or(false);
    if enabled {
        set_from_event(view, event);
    }
}

unsafe extern "C-unwind" fn mouse_dragged(this: &mut AnyObject, _cmd: Sel, event: id) {
    let view = this as *mut _ as id;
    let dragging = with_state(|s| s.brightness.state().dragging).unwrap_or(false);
    if dragging {
        set_from_event(view, event);
    }
}

unsafe extern "C-unwind" fn mouse_up(this: &mut AnyObject, _cmd: Sel, _event: id) {
    let view = this as *mut _ as id;
    let changed = with_state(|s| s.brightness.state().dragging && s.brightness.end_drag())
        .unwrap_or(false);
    if changed {
        redraw(view);
    }
}

unsafe extern "C-unwind" fn right_mouse_down(this: &mut AnyObject, _cmd: Sel, _event: id) {
    show_menu(this as *mut _ as id);
}

unsafe extern "C-unwind" fn scroll_wheel(this: &mut AnyObject, _cmd: Sel, event: id) {
    let dy: f64 = msg_send![event, scrollingDeltaY];
    let precise: bool = msg_send![event, hasPreciseScrollingDeltas];
    let momentum: usize = msg_send![event, momentumPhase];

    let moved = with_state(|s| {
        let delta = s.scroll.feed(dy, precise, momentum != 0);
        if delta != 0.0 {
            s.brightness.step(delta);
        }
        delta != 0.0
    })
    .unwrap_or(false);
    if moved {
        redraw(this as *mut _ as id);
    }
}

unsafe extern "C-unwind" fn poll_tick(this: &mut AnyObject, _cmd: Sel) {
    let view = this as *mut _ as id;
    dispatch_events(view);

    let changed = with_state(|s| s.brightness.poll()).unwrap_or(false);
    if changed {
        let _: () = msg_send![view, setNeedsDisplay: YES];
        update_status_menu(view);
    }
}

// ===== Status menu actions =====

// The menu has closed by the time an action fires and no state borrow is
// held, so the queue is flushed right away instead of on the next tick.

unsafe extern "C-unwind" fn toggle_night_shift(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::ToggleNightShift);
    dispatch_events(this as *mut _ as id);
}

unsafe extern "C-unwind" fn show_about(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::ShowAbout);
    dispatch_events(this as *mut _ as id);
}

unsafe extern "C-unwind" fn quit_app(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let app: id = NSApp();
    let _: () = msg_send![app, terminate: nil];
}
