//! Cross-platform helpers that work in both WASM and native contexts

#[cfg(target_arch = "wasm32")]
mod wasm_impl {
    pub fn set_panic_hook() {
        // Better panic messages in the browser console
        console_error_panic_hook::set_once();
    }

    pub fn spawn_async<F>(future: F)
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native_impl {
    pub fn set_panic_hook() {
        // Native panic output is already readable; nothing to install
    }

    pub fn spawn_async<F>(future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(future);
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_impl::*;

#[cfg(not(target_arch = "wasm32"))]
pub use native_impl::*;
