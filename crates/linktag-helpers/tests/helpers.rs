#![allow(clippy::unwrap_used, reason = "Fine in tests")]
use std::cell::RefCell;

use linktag_helpers::{
  Fallback,
  HtmlOptions,
  LinkHelper,
  LinkTarget,
  MailEncoding,
  MailOptions,
  RequestContext,
  RouteQuery,
  UrlError,
  UrlResolver,
};
use linktag_html::HtmlTagBuilder;
use percent_encoding::percent_decode_str;

/// Resolver that answers every route with a fixed path and remembers what it
/// was asked.
struct StubResolver {
  path:  String,
  calls: RefCell<Vec<LinkTarget>>,
}

impl StubResolver {
  fn new(path: &str) -> Self {
    Self {
      path:  path.to_string(),
      calls: RefCell::new(Vec::new()),
    }
  }
}

impl UrlResolver for StubResolver {
  fn resolve(
    &self,
    target: &LinkTarget,
    _request: &RequestContext,
  ) -> Result<String, UrlError> {
    self.calls.borrow_mut().push(target.clone());
    match target {
      LinkTarget::Literal(url) => Ok(url.clone()),
      LinkTarget::Route(_) => Ok(self.path.clone()),
    }
  }
}

fn percent_decode(text: &str) -> String {
  percent_decode_str(text).decode_utf8().unwrap().into_owned()
}

fn between<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
  let from = text.find(start).unwrap() + start.len();
  let to = from + text[from..].find(end).unwrap();
  &text[from..to]
}

#[test]
fn test_link_to_literal_and_missing_name() {
  let request = RequestContext::new("/");
  let tags = HtmlTagBuilder::default();
  let resolver = StubResolver::new("/unused");
  let helper = LinkHelper::new(&resolver, &tags, &request);

  assert_eq!(
    helper
      .link_to(Some("X"), &"http://a".into(), &HtmlOptions::new())
      .unwrap(),
    r#"<a href="http://a">X</a>"#
  );
  assert_eq!(
    helper
      .link_to(None, &"http://a".into(), &HtmlOptions::new())
      .unwrap(),
    r#"<a href="http://a">http://a</a>"#
  );
  // Literal links never reach the resolver
  assert!(resolver.calls.borrow().is_empty());
}

#[test]
fn test_url_for_defaults_only_path() {
  let request = RequestContext::new("/");
  let tags = HtmlTagBuilder::default();
  let resolver = StubResolver::new("/posts");
  let helper = LinkHelper::new(&resolver, &tags, &request);

  helper.url_for(&RouteQuery::new().into()).unwrap();
  helper
    .url_for(&RouteQuery::new().only_path(false).into())
    .unwrap();

  let calls = resolver.calls.borrow();
  let only_paths: Vec<_> = calls
    .iter()
    .map(|call| {
      match call {
        LinkTarget::Route(query) => query.only_path,
        LinkTarget::Literal(_) => None,
      }
    })
    .collect();
  assert_eq!(only_paths, vec![Some(true), Some(false)]);
}

#[test]
fn test_url_for_literal_is_unchanged() {
  let request = RequestContext::new("/");
  let tags = HtmlTagBuilder::default();
  let resolver = StubResolver::new("/posts");
  let helper = LinkHelper::new(&resolver, &tags, &request);

  assert_eq!(
    helper.url_for(&"http://example.com/a b".into()).unwrap(),
    "http://example.com/a b"
  );
}

#[test]
fn test_confirm_with_single_quote() {
  let request = RequestContext::new("/");
  let tags = HtmlTagBuilder::default();
  let resolver = StubResolver::new("/");
  let helper = LinkHelper::new(&resolver, &tags, &request);

  let html = HtmlOptions::from_pairs([("confirm", "Sure?")]).unwrap();
  let out = helper.link_to(Some("X"), &"/x".into(), &html).unwrap();
  assert!(out.contains(r#"onclick="return confirm('Sure?');""#));
  assert!(!out.contains("confirm=\""));

  let html = HtmlOptions::from_pairs([("confirm", "Don't")]).unwrap();
  let out = helper.link_to(Some("X"), &"/x".into(), &html).unwrap();
  assert!(out.contains(r#"onclick="return confirm('Don\'t');""#));
}

#[test]
fn test_link_image_to_defaults() {
  let request = RequestContext::new("/");
  let tags = HtmlTagBuilder::default();
  let resolver = StubResolver::new("/home");
  let helper = LinkHelper::new(&resolver, &tags, &request);

  let out = helper
    .link_image_to("logo", &RouteQuery::new().into(), &HtmlOptions::new())
    .unwrap();
  assert_eq!(
    out,
    r#"<a href="/home"><img alt="Logo" src="/images/logo.png" /></a>"#
  );
}

#[test]
fn test_link_unless_true_ignores_target() {
  let request = RequestContext::new("/");
  let tags = HtmlTagBuilder::default();
  let resolver = StubResolver::new("/x");
  let helper = LinkHelper::new(&resolver, &tags, &request);

  for target in [
    LinkTarget::literal("/a"),
    RouteQuery::new().controller("b").into(),
  ] {
    let out = helper
      .link_to_unless(true, "X & Y", &target, &HtmlOptions::new(), None)
      .unwrap();
    assert_eq!(out, "X &amp; Y");
  }
  assert!(resolver.calls.borrow().is_empty());
}

#[test]
fn test_link_if_false_uses_fallback() {
  let request = RequestContext::new("/");
  let tags = HtmlTagBuilder::default();
  let resolver = StubResolver::new("/x");
  let helper = LinkHelper::new(&resolver, &tags, &request);

  let fallback = |name: &str| format!("[{name}]");
  let out = helper
    .link_to_if(
      false,
      "X",
      &"/x".into(),
      &HtmlOptions::new(),
      Some(&Fallback::Name(&fallback)),
    )
    .unwrap();
  assert_eq!(out, "[X]");
}

#[test]
fn test_current_page_both_branches() {
  let request = RequestContext::new("/posts");
  let tags = HtmlTagBuilder::default();

  let matching = StubResolver::new("/posts");
  let helper = LinkHelper::new(&matching, &tags, &request);
  assert!(helper.current_page(&RouteQuery::new().into()).unwrap());

  let other = StubResolver::new("/posts/new");
  let helper = LinkHelper::new(&other, &tags, &request);
  assert!(!helper.current_page(&RouteQuery::new().into()).unwrap());
}

#[test]
fn test_link_to_unless_current_renders_text_on_current_page() {
  let request = RequestContext::new("/posts");
  let tags = HtmlTagBuilder::default();
  let resolver = StubResolver::new("/posts");
  let helper = LinkHelper::new(&resolver, &tags, &request);

  let out = helper
    .link_to_unless_current(
      "Posts",
      &RouteQuery::new().into(),
      &HtmlOptions::new(),
      None,
    )
    .unwrap();
  assert_eq!(out, "Posts");
}

#[test]
fn test_resolver_errors_propagate() {
  let request = RequestContext::new("/");
  let tags = HtmlTagBuilder::default();
  let failing = |_: &LinkTarget,
                 _: &RequestContext|
   -> Result<String, UrlError> { Err(UrlError::MissingController) };
  let helper = LinkHelper::new(&failing, &tags, &request);

  assert_eq!(
    helper
      .link_to(Some("X"), &RouteQuery::new().into(), &HtmlOptions::new())
      .unwrap_err(),
    UrlError::MissingController
  );
}

#[test]
fn test_mail_to_hex_reconstructs_address() {
  let request = RequestContext::new("/");
  let tags = HtmlTagBuilder::default();
  let resolver = StubResolver::new("/");
  let helper = LinkHelper::new(&resolver, &tags, &request);

  let options = MailOptions::from_pairs([("encode", "hex")]).unwrap();
  let out = helper.mail_to("me@x.com", None, &options);
  let href = between(&out, "href=\"", "\"");

  assert!(href.starts_with("mailto:"));
  let encoded = href.trim_start_matches("mailto:");
  assert_eq!(encoded, "%6d%65@%78.%63%6f%6d");
  assert_eq!(percent_decode(encoded), "me@x.com");
  assert!(out.ends_with(">me@x.com</a>"));
}

#[test]
fn test_mail_to_javascript_decodes_to_document_write() {
  let request = RequestContext::new("/");
  let tags = HtmlTagBuilder::default();
  let resolver = StubResolver::new("/");
  let helper = LinkHelper::new(&resolver, &tags, &request);

  let plain = helper.mail_to("me@x.com", None, &MailOptions::new());
  let options = MailOptions::new().encode(MailEncoding::Javascript);
  let out = helper.mail_to("me@x.com", None, &options);

  assert!(out.starts_with("<script type=\"text/javascript\">eval(unescape('"));
  assert!(out.ends_with("'))</script>"));

  let payload = between(&out, "unescape('", "'))");
  assert!(!payload.contains('@'));
  assert_eq!(percent_decode(payload), format!("document.write('{plain}');"));
}
