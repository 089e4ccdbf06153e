//! Status bar (menu bar) item hosting the slider, and its menu.
//!
//! The slider view handles left clicks itself, so the menu is not attached
//! to the status item; the view pops it up on right-click or control-click.
//! Menu contents:
//! - Brightness: NN% (disabled header)
//! - Night Shift (only when the system supports it)
//! - About brightbar
//! - Quit

use objc2::runtime::Sel;

use crate::config::AppConfig;
use crate::model::constants::SLIDER_HEIGHT;
use crate::platform::macos::app::with_state;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, NSPoint, NSRect, NSSize, ObjectExt, NO,
};
use crate::platform::macos::ui::slider::create_slider_view;

/// NSControlStateValueOn / NSControlStateValueOff
const STATE_ON: isize = 1;
const STATE_OFF: isize = 0;

/// Install the status bar item with the slider view and its menu.
///
/// Returns the slider view, which doubles as target for timers and menu
/// actions, or `nil` if the view class could not be created.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
pub unsafe fn install_status_bar(config: &AppConfig) -> id {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
    let status_item: id = msg_send![status_bar, statusItemWithLength: config.slider_width];

    // Keep a strong reference so it doesn't get deallocated
    let _: id = msg_send![status_item, retain];

    let view = create_slider_view(config.slider_width, SLIDER_HEIGHT);
    if view == nil {
        log::error!("Could not register the slider view class");
        return nil;
    }

    let button: id = msg_send![status_item, button];
    if button != nil {
        let bounds: NSRect = msg_send![button, bounds];
        let y = ((bounds.size.height - SLIDER_HEIGHT) / 2.0).max(0.0);
        let frame = NSRect::new(
            NSPoint::new(0.0, y),
            NSSize::new(config.slider_width, SLIDER_HEIGHT),
        );
        let _: () = msg_send![view, setFrame: frame];
        let _: () = msg_send![button, addSubview: view];
    } else {
        let _: () = msg_send![status_item, setView: view];
    }
    (*view).store_ivar::<id>("_statusItem", status_item);

    let night_shift_available = with_state(|s| s.night_shift.is_some()).unwrap_or(false);
    create_status_menu(view, night_shift_available);
    update_status_menu(view);

    view
}

unsafe fn menu_item(title: &str, action: Option<Sel>, key: &str, target: id) -> id {
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: nsstring_id(title),
        action: action,
        keyEquivalent: nsstring_id(key)
    ];
    if target != nil {
        let _: () = msg_send![item, setTarget: target];
    }
    item
}

/// Build the menu and remember its mutable items in the view's ivars.
unsafe fn create_status_menu(view: id, night_shift_available: bool) {
    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];
    let _: () = msg_send![menu, setAutoenablesItems: NO];

    // Header (informational)
    let header = menu_item("Brightness", None, "", nil);
    let _: () = msg_send![header, setEnabled: NO];
    let _: () = msg_send![menu, addItem: header];
    (*view).store_ivar::<id>("_headerItem", header);

    if night_shift_available {
        let item = menu_item("Night Shift", Some(sel!(toggleNightShift:)), "", view);
        let _: () = msg_send![menu, addItem: item];
        (*view).store_ivar::<id>("_nightShiftItem", item);
    }

    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];

    let about = menu_item("About brightbar", Some(sel!(showAbout:)), "", view);
    let _: () = msg_send![menu, addItem: about];

    let quit = menu_item("Quit", Some(sel!(quitApp:)), "q", view);
    let _: () = msg_send![menu, addItem: quit];

    (*view).store_ivar::<id>("_menu", menu);
}

/// Refresh the header text and the Night Shift checkmark from the state.
///
/// # Safety
/// `view` must be a BrightnessSliderView. Main thread only.
pub unsafe fn update_status_menu(view: id) {
    let Some((label, night_shift_active)) =
        with_state(|s| (s.brightness.state().label(), s.night_shift_active()))
    else {
        return;
    };

    let header: id = *(*view).load_ivar::<id>("_headerItem");
    if header != nil {
        let _: () = msg_send![header, setTitle: nsstring_id(&label)];
    }

    let item: id = *(*view).load_ivar::<id>("_nightShiftItem");
    if item != nil {
        let state = if night_shift_active { STATE_ON } else { STATE_OFF };
        let _: () = msg_send![item, setState: state];
    }
}
