use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::error::AppError;
use crate::services::fetch_placeholder;
use crate::state::{Action, AppState, Store};

/// Deferred async unit of work run against the store. Thunks dispatch
/// actions as their side effect; failures bubble up to the caller.
pub type Thunk<S, A> = Rc<dyn Fn(Store<S, A>) -> LocalBoxFuture<'static, Result<(), AppError>>>;

pub type AppThunk = Thunk<AppState, Action>;

/// Combine thunks into one, run strictly in the given order.
///
/// Each thunk completes before the next one starts, so a later thunk can
/// read state written by an earlier one. The first failure propagates
/// unmodified and the remaining thunks are skipped.
pub fn compose_thunks<S: 'static, A: 'static>(thunks: Vec<Thunk<S, A>>) -> Thunk<S, A> {
    Rc::new(move |store: Store<S, A>| {
        let thunks = thunks.clone();
        async move {
            for thunk in thunks {
                thunk(store.clone()).await?;
            }
            Ok(())
        }
        .boxed_local()
    })
}

/// HOME thunk: fetch the placeholder payload and record the outcome.
pub fn load_placeholder() -> AppThunk {
    Rc::new(|store: Store<AppState, Action>| {
        async move {
            store.dispatch(Action::PlaceholderLoading);
            match fetch_placeholder().await {
                Ok(placeholder) => {
                    store.dispatch(Action::PlaceholderLoaded(placeholder));
                    Ok(())
                }
                Err(err) => {
                    store.dispatch(Action::PlaceholderFailed(err.to_string()));
                    Err(err)
                }
            }
        }
        .boxed_local()
    })
}
