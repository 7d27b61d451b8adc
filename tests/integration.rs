// SPDX-License-Identifier: MPL-2.0
use health_portal::app::{Flags, Message, Portal, Services};
use health_portal::application::port::storage::LANGUAGE_KEY;
use health_portal::application::port::Storage;
use health_portal::config::Config;
use health_portal::dom::{Node, Selector};
use health_portal::domain::{Page, Role};
use health_portal::error::I18nError;
use health_portal::i18n::{Dictionary, DictionaryStore, LanguageCode};
use health_portal::infrastructure::{FileStorage, LucideIcons, MemoryStorage};
use health_portal::render::{Renderer, HEADING_ACCENT_CLASS};
use health_portal::ui::{modal, pages};
use tempfile::tempdir;

const EN: &str = include_str!("../assets/i18n/en.ftl");
const HI: &str = include_str!("../assets/i18n/hi.ftl");

fn embedded() -> DictionaryStore {
    DictionaryStore::load_embedded().expect("embedded dictionaries parse")
}

fn landing(store: DictionaryStore, services: Services) -> Portal {
    Portal::boot(&Flags::default(), &Config::default(), store, services)
}

/// Text of every render target on the landing page, in table order.
fn target_texts(portal: &Portal) -> Vec<Option<String>> {
    Renderer::for_page(Page::Landing)
        .targets()
        .iter()
        .map(|target| portal.document().text_content(&target.selector))
        .collect()
}

#[test]
fn every_language_defines_the_same_keys() {
    let store = embedded();
    assert!(store.validate().is_complete());

    let english = store.get(LanguageCode::English).expect("en loaded").keys().clone();
    for language in LanguageCode::ALL {
        let dictionary = store.get(language).expect("language loaded");
        assert_eq!(dictionary.keys(), &english, "{language} differs from en");
    }
}

#[test]
fn render_pass_is_idempotent() {
    let store = embedded();
    let dictionary = store.get(LanguageCode::Hindi).expect("hi loaded");
    let renderer = Renderer::for_page(Page::Landing);
    let mut document = pages::build(Page::Landing);

    renderer.render_all(&mut document, dictionary);
    let once = document.to_html();
    renderer.render_all(&mut document, dictionary);
    assert_eq!(document.to_html(), once);
}

#[test]
fn switching_away_and_back_restores_text() {
    let mut portal = landing(embedded(), Services::in_memory());
    let original = target_texts(&portal);
    let original_html = portal.to_html();

    portal.select_language("bn").expect("bengali is supported");
    assert_ne!(target_texts(&portal), original);

    portal.select_language("en").expect("english is supported");
    assert_eq!(target_texts(&portal), original);
    assert_eq!(portal.to_html(), original_html);
}

#[test]
fn heading_splits_at_last_word() {
    let renderer = Renderer::for_page(Page::Landing);
    let mut document = pages::build(Page::Landing);

    let three_words =
        Dictionary::parse(LanguageCode::English, "main-title = Alpha Beta Gamma\n").expect("valid ftl");
    renderer.render_all(&mut document, &three_words);
    let heading = document.query(&Selector::id("main-heading")).expect("heading exists");
    let [Node::Text(lead), Node::Element(accent)] = heading.child_nodes() else {
        panic!("unexpected heading nodes: {:?}", heading.child_nodes());
    };
    assert_eq!(lead.trim_end(), "Alpha Beta");
    assert_eq!(accent.text_content(), "Gamma");
    assert_eq!(accent.attribute("class"), Some(HEADING_ACCENT_CLASS));

    let one_word = Dictionary::parse(LanguageCode::English, "main-title = Gamma\n").expect("valid ftl");
    renderer.render_all(&mut document, &one_word);
    let heading = document.query(&Selector::id("main-heading")).expect("heading exists");
    let [Node::Element(accent)] = heading.child_nodes() else {
        panic!("unexpected heading nodes: {:?}", heading.child_nodes());
    };
    assert_eq!(accent.text_content(), "Gamma");
}

#[test]
fn login_title_substitutes_localized_role_name() {
    let mut portal = landing(embedded(), Services::in_memory());
    portal.update(Message::RoleCardClicked(Role::Asha));

    let title = portal
        .document()
        .text_content(&Selector::id(modal::TITLE_ID))
        .expect("modal title exists");
    assert_eq!(title, "Login as ASHA Worker");
}

#[test]
fn unsupported_language_changes_nothing() {
    let mut portal = landing(embedded(), Services::in_memory());
    let before = portal.to_html();

    let result = portal.select_language("fr");

    assert_eq!(result, Err(I18nError::UnsupportedLanguage("fr".into())));
    assert_eq!(portal.current_language(), LanguageCode::English);
    assert_eq!(portal.to_html(), before);
    assert_eq!(portal.into_services().persistent.get(LANGUAGE_KEY), None);
}

#[test]
fn stored_language_is_restored_on_next_load() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("preferences.cbor");

    let (storage, warning) = FileStorage::open(path.clone());
    assert!(warning.is_none());
    let services = Services {
        persistent: Box::new(storage),
        session: Box::new(MemoryStorage::new()),
        icons: Box::new(LucideIcons::new()),
    };
    let mut first = landing(embedded(), services);
    first.update(Message::LanguageOptionClicked("hi".into()));
    assert_eq!(first.current_language(), LanguageCode::Hindi);
    drop(first);

    let (storage, _) = FileStorage::open(path);
    let services = Services {
        persistent: Box::new(storage),
        session: Box::new(MemoryStorage::new()),
        icons: Box::new(LucideIcons::new()),
    };
    let second = landing(embedded(), services);
    assert_eq!(second.current_language(), LanguageCode::Hindi);
    assert_eq!(
        second.document().text_content(&Selector::id("header-title")),
        Some("स्मार्ट स्वास्थ्य मॉनिटर".into())
    );
}

#[test]
fn deleted_key_leaves_only_its_target_stale() {
    let hindi_without_tagline: String = HI
        .lines()
        .filter(|line| !line.starts_with("tagline ="))
        .map(|line| format!("{line}\n"))
        .collect();
    let store = DictionaryStore::from_dictionaries([
        Dictionary::parse(LanguageCode::English, EN).expect("en parses"),
        Dictionary::parse(LanguageCode::Hindi, &hindi_without_tagline).expect("hi parses"),
    ]);
    let mut portal = landing(store, Services::in_memory());
    let english_tagline = portal.document().text_content(&Selector::id("tagline"));

    let report = portal.select_language("hi").expect("hindi loaded");
    assert_eq!(report.missing_keys, vec!["tagline".to_string()]);

    let full_hindi = embedded();
    let mut reference = pages::build(Page::Landing);
    Renderer::for_page(Page::Landing)
        .render_all(&mut reference, full_hindi.get(LanguageCode::Hindi).expect("hi loaded"));

    for target in Renderer::for_page(Page::Landing).targets() {
        let actual = portal.document().text_content(&target.selector);
        if target.selector == Selector::id("tagline") {
            assert_eq!(actual, english_tagline);
        } else {
            assert_eq!(actual, reference.text_content(&target.selector), "{}", target.selector);
        }
    }
}
