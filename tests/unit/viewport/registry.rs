use std::cell::RefCell;

use super::*;

struct Recorder {
    name: &'static str,
    log: Rc<RefCell<Vec<(&'static str, Rect)>>>,
}

impl ViewportClient for Recorder {
    fn did_set_viewport_rect(&self, rect: Rect) {
        self.log.borrow_mut().push((self.name, rect));
    }
}

fn client(
    name: &'static str,
    log: &Rc<RefCell<Vec<(&'static str, Rect)>>>,
) -> Rc<dyn ViewportClient> {
    Rc::new(Recorder {
        name,
        log: Rc::clone(log),
    })
}

#[test]
fn notifies_in_registration_order() {
    let registry = ViewportRegistry::new();
    let log = Rc::default();
    let a = client("a", &log);
    let b = client("b", &log);
    let _sa = registry.register_viewport_client(Rc::downgrade(&a));
    let _sb = registry.register_viewport_client(Rc::downgrade(&b));

    let r = Rect::new(0.0, 0.0, 800.0, 600.0);
    registry.set_viewport_rect(r);
    assert_eq!(*log.borrow(), vec![("a", r), ("b", r)]);
    assert_eq!(registry.viewport_rect(), r);
}

#[test]
fn dropping_subscription_unregisters() {
    let registry = ViewportRegistry::new();
    let log = Rc::default();
    let a = client("a", &log);
    let sub = registry.register_viewport_client(Rc::downgrade(&a));
    assert_eq!(registry.client_count(), 1);
    drop(sub);
    assert_eq!(registry.client_count(), 0);

    registry.set_viewport_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
    assert!(log.borrow().is_empty());
}

#[test]
fn dispose_is_idempotent() {
    let registry = ViewportRegistry::new();
    let log = Rc::default();
    let a = client("a", &log);
    let mut sub = registry.register_viewport_client(Rc::downgrade(&a));
    let id = sub.id().unwrap();
    sub.dispose();
    sub.dispose();
    assert!(sub.id().is_none());
    assert!(!registry.unregister_viewport_client(id));
}

#[test]
fn dead_clients_are_skipped_and_pruned() {
    let registry = ViewportRegistry::new();
    let log = Rc::default();
    let a = client("a", &log);
    let b = client("b", &log);
    let _sa = registry.register_viewport_client(Rc::downgrade(&a));
    let _sb = registry.register_viewport_client(Rc::downgrade(&b));
    drop(a);

    registry.set_viewport_rect(Rect::new(0.0, 0.0, 5.0, 5.0));
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(log.borrow()[0].0, "b");
    assert_eq!(registry.client_count(), 1);
}

#[test]
fn subscription_outliving_registry_is_noop() {
    let registry = ViewportRegistry::new();
    let log = Rc::default();
    let a = client("a", &log);
    let sub = registry.register_viewport_client(Rc::downgrade(&a));
    drop(registry);
    drop(sub);
}

struct SelfRemoving {
    registry: Rc<ViewportRegistry>,
    sub: RefCell<Option<ViewportSubscription>>,
    calls: RefCell<u32>,
}

impl ViewportClient for SelfRemoving {
    fn did_set_viewport_rect(&self, _rect: Rect) {
        *self.calls.borrow_mut() += 1;
        self.sub.borrow_mut().take();
        assert_eq!(self.registry.client_count(), 0);
    }
}

#[test]
fn client_may_unregister_during_notification() {
    let registry = ViewportRegistry::new();
    let c = Rc::new(SelfRemoving {
        registry: Rc::clone(&registry),
        sub: RefCell::new(None),
        calls: RefCell::new(0),
    });
    let weak: Weak<dyn ViewportClient> = Rc::downgrade(&c) as Weak<dyn ViewportClient>;
    *c.sub.borrow_mut() = Some(registry.register_viewport_client(weak));

    registry.set_viewport_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
    registry.set_viewport_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
    assert_eq!(*c.calls.borrow(), 1);
}
