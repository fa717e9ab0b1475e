//! Navigation seam between the resolver and a host router

use std::rc::Rc;

/// Navigation primitives a host router provides.
///
/// Both calls are fire-and-forget: the resolver never waits for the
/// navigation to land. The new URL comes back through
/// [`RouteLayer::on_url_change`](crate::RouteLayer::on_url_change).
pub trait Navigate {
    /// Apply `url` as a history-preserving navigation without a full reload.
    fn push_url(&self, url: &str);

    /// Reverse the most recent navigation.
    fn go_back(&self);
}

/// [`Navigate`] built from a push closure and a back closure.
pub struct FnNavigate<P, B> {
    push: P,
    back: B,
}

impl<P, B> FnNavigate<P, B>
where
    P: Fn(&str),
    B: Fn(),
{
    pub fn new(push: P, back: B) -> Self {
        Self { push, back }
    }
}

impl<P, B> Navigate for FnNavigate<P, B>
where
    P: Fn(&str),
    B: Fn(),
{
    fn push_url(&self, url: &str) {
        (self.push)(url)
    }

    fn go_back(&self) {
        (self.back)()
    }
}

impl<N: Navigate + ?Sized> Navigate for &N {
    fn push_url(&self, url: &str) {
        (**self).push_url(url)
    }

    fn go_back(&self) {
        (**self).go_back()
    }
}

impl<N: Navigate + ?Sized> Navigate for Box<N> {
    fn push_url(&self, url: &str) {
        (**self).push_url(url)
    }

    fn go_back(&self) {
        (**self).go_back()
    }
}

impl<N: Navigate + ?Sized> Navigate for Rc<N> {
    fn push_url(&self, url: &str) {
        (**self).push_url(url)
    }

    fn go_back(&self) {
        (**self).go_back()
    }
}
