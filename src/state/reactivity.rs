// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten el valor y la lista de subscribers.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Leer el valor actual con `reader`
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Modificar el valor en el lugar y notificar subscribers
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify(&self) {
        // Copia para que un callback pueda suscribirse o leer el valor
        let callbacks: Vec<Callback> = self.subscribers.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_every_subscriber() {
        let state = ReactiveState::new(0);
        let calls = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let calls = Rc::clone(&calls);
            state.subscribe(move || calls.set(calls.get() + 1));
        }

        state.set(5);
        assert_eq!(state.get(), 5);
        assert_eq!(calls.get(), 2);

        state.update(|v| *v += 1);
        assert_eq!(state.get(), 6);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::new());
        let clone = state.clone();
        let seen = Rc::new(RefCell::new(String::new()));

        {
            let seen = Rc::clone(&seen);
            let reader = state.clone();
            state.subscribe(move || *seen.borrow_mut() = reader.get());
        }

        clone.set("hello".to_string());
        assert_eq!(state.get(), "hello");
        assert_eq!(*seen.borrow(), "hello");
        assert_eq!(clone.subscriber_count(), 1);
    }
}
