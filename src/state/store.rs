use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Subscriber = Box<dyn Fn()>;

/// Reducer-driven state container.
///
/// Cheap to clone (everything behind `Rc`); constructed once in `main` and
/// passed by reference through props, the router and route thunks. All
/// mutation goes through `dispatch`.
pub struct Store<S, A> {
    state: Rc<RefCell<S>>,
    reducer: Rc<dyn Fn(&S, &A) -> S>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            reducer: self.reducer.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<S, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("subscribers", &self.subscribers.borrow().len())
            .finish_non_exhaustive()
    }
}

// Identity comparison so the store can travel through Yew props.
impl<S, A> PartialEq for Store<S, A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<S: Clone, A> Store<S, A> {
    pub fn new(initial: S, reducer: impl Fn(&S, &A) -> S + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(initial)),
            reducer: Rc::new(reducer),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Run the action through the reducer, commit the result, notify subscribers.
    pub fn dispatch(&self, action: A) {
        let next = {
            let current = self.state.borrow();
            (self.reducer)(&current, &action)
        };
        *self.state.borrow_mut() = next;
        self.notify();
    }

    /// Snapshot of the current state.
    pub fn get_state(&self) -> S {
        self.state.borrow().clone()
    }

    /// Register a callback invoked after every dispatch.
    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        for subscriber in self.subscribers.borrow().iter() {
            subscriber();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Debug, PartialEq, Default)]
    struct Counter {
        value: i32,
    }

    enum CounterAction {
        Add(i32),
        Reset,
    }

    fn counter_reducer(state: &Counter, action: &CounterAction) -> Counter {
        match action {
            CounterAction::Add(n) => Counter {
                value: state.value + n,
            },
            CounterAction::Reset => Counter::default(),
        }
    }

    #[test]
    fn test_dispatch_applies_reducer() {
        let store = Store::new(Counter::default(), counter_reducer);
        store.dispatch(CounterAction::Add(2));
        store.dispatch(CounterAction::Add(3));
        assert_eq!(store.get_state().value, 5);
        store.dispatch(CounterAction::Reset);
        assert_eq!(store.get_state(), Counter::default());
    }

    #[test]
    fn test_subscribers_notified_on_every_dispatch() {
        let store = Store::new(Counter::default(), counter_reducer);
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            store.subscribe(move || calls.set(calls.get() + 1));
        }
        store.dispatch(CounterAction::Add(1));
        store.dispatch(CounterAction::Reset);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new(Counter::default(), counter_reducer);
        let clone = store.clone();
        clone.dispatch(CounterAction::Add(7));
        assert_eq!(store.get_state().value, 7);
        assert_eq!(store, clone);
    }
}
