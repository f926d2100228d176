#![no_main]

//! Drives a hub-wired modal host with arbitrary operation sequences.
//!
//! Checks that nothing panics, that `Show` never outnumbers presentation
//! calls, and that an invalidated host stays silent.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mhost_core::{HostEnvironment, Orientation, PlatformEvent, RemoteButton};
use mhost_modal::{
    ModalConfig, ModalConfigPatch, ModalHost, ModalHostId, PresentOutcome, PresentationContext,
    PresentationInteractor,
};
use mhost_runtime::PlatformEventHub;

#[derive(Debug, Arbitrary)]
enum Op {
    Present { animated: bool },
    PresentConfigured,
    Complete,
    CompleteCurrent,
    Dismiss { animated: bool },
    Rotate(u8),
    Press(u8),
    Orientations(Vec<String>),
    Identifier(Option<i64>),
    Animation(String),
    ImmediateCompletion(bool),
    DropInteractor,
    Invalidate,
}

#[derive(Debug, Arbitrary)]
struct Input {
    remote: bool,
    orientations: Vec<String>,
    ops: Vec<Op>,
}

#[derive(Default)]
struct Interactor {
    immediate: Cell<bool>,
    on_screen: Cell<bool>,
    presents: Cell<usize>,
}

impl PresentationInteractor for Interactor {
    fn present(&self, _: ModalHostId, _: &PresentationContext, _: bool) -> PresentOutcome {
        self.presents.set(self.presents.get() + 1);
        self.on_screen.set(true);
        if self.immediate.get() {
            PresentOutcome::Completed
        } else {
            PresentOutcome::Pending
        }
    }

    fn dismiss(&self, _: ModalHostId, _: &PresentationContext, _: bool) {
        self.on_screen.set(false);
    }

    fn is_presented(&self, _: ModalHostId) -> bool {
        self.on_screen.get()
    }
}

const BUTTONS: [RemoteButton; 4] = [
    RemoteButton::Menu,
    RemoteButton::Back,
    RemoteButton::Select,
    RemoteButton::PlayPause,
];

fuzz_target!(|input: Input| {
    let env = if input.remote {
        HostEnvironment::remote_control()
    } else {
        HostEnvironment::touch()
    };
    let config = ModalConfig::new().supported_orientations(input.orientations);
    let host = Rc::new(RefCell::new(ModalHost::with_config(env, config)));
    let mut interactor = Some(Rc::new(Interactor::default()));
    if let Some(interactor) = &interactor {
        host.borrow_mut().set_interactor(interactor);
    }

    let shows = Rc::new(Cell::new(0usize));
    let events = Rc::new(Cell::new(0usize));
    {
        let shows = Rc::clone(&shows);
        let events = Rc::clone(&events);
        host.borrow_mut().set_event_handler(move |event| {
            events.set(events.get() + 1);
            if matches!(event, mhost_modal::ModalHostEvent::Show) {
                shows.set(shows.get() + 1);
            }
        });
    }

    let hub = PlatformEventHub::new();
    let _subscription = hub.subscribe(&host);
    let mut presents_seen = 0usize;
    let mut silent_from: Option<usize> = None;

    for op in input.ops.into_iter().take(256) {
        match op {
            Op::Present { animated } => {
                host.borrow_mut().request_present(animated);
            }
            Op::PresentConfigured => {
                host.borrow_mut().present();
            }
            Op::Complete => {
                let pending = host.borrow().pending_context();
                if let Some(context) = pending {
                    host.borrow_mut().complete_presentation(context);
                }
            }
            Op::CompleteCurrent => {
                let (context, pending) = {
                    let host = host.borrow();
                    (host.current_context().id(), host.pending_context())
                };
                let before = shows.get();
                let shown = host.borrow_mut().complete_presentation(context);
                assert_eq!(shown, pending == Some(context));
                if !shown {
                    assert_eq!(shows.get(), before);
                }
            }
            Op::Dismiss { animated } => {
                host.borrow_mut().request_dismiss(animated);
            }
            Op::Rotate(n) => {
                let orientation = Orientation::ALL[usize::from(n) % Orientation::ALL.len()];
                hub.dispatch(&PlatformEvent::OrientationChanged(orientation));
            }
            Op::Press(n) => {
                let button = BUTTONS[usize::from(n) % BUTTONS.len()];
                hub.dispatch(&PlatformEvent::RemoteNavigation(button));
            }
            Op::Orientations(specs) => {
                host.borrow_mut()
                    .configure(ModalConfigPatch::new().supported_orientations(specs));
            }
            Op::Identifier(identifier) => {
                host.borrow_mut()
                    .configure(ModalConfigPatch::new().identifier(identifier));
            }
            Op::Animation(name) => {
                host.borrow_mut()
                    .configure(ModalConfigPatch::new().animation_type(name));
            }
            Op::ImmediateCompletion(immediate) => {
                if let Some(interactor) = &interactor {
                    interactor.immediate.set(immediate);
                }
            }
            Op::DropInteractor => {
                if let Some(dropped) = interactor.take() {
                    presents_seen += dropped.presents.get();
                }
            }
            Op::Invalidate => {
                host.borrow_mut().invalidate();
                silent_from.get_or_insert(events.get());
            }
        }

        if let Some(count) = silent_from {
            assert_eq!(events.get(), count, "invalidated host emitted an event");
        }
    }

    let presents = presents_seen + interactor.as_ref().map_or(0, |i| i.presents.get());
    assert!(shows.get() <= presents);
});
