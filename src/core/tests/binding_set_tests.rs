use crate::core::{AddOrigin, Binding, BindingMode, BindingSet};

/// Helper to create a custom set with a few bindings
fn custom_set() -> BindingSet {
    let mut set = BindingSet::new();
    set.add_binding(Binding::new("SUPER, Q", "killactive"), AddOrigin::User);
    set.add_binding(Binding::new("SUPER, RETURN", "exec, kitty"), AddOrigin::User);
    set
}

#[test]
fn test_new_set_is_empty_custom() {
    let set = BindingSet::new();
    assert!(set.is_empty());
    assert_eq!(set.mode(), BindingMode::Custom);
    assert_eq!(set.modifier_alias(), "");
}

#[test]
fn test_find_by_trigger_normalises_input() {
    let set = custom_set();

    let found = set.find_by_trigger("  SUPER ,Q ");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].action(), "killactive");
}

#[test]
fn test_check_unique_free_combination() {
    let set = custom_set();

    let (unique, conflicts) = set.check_unique("SUPER, E");
    assert!(unique);
    assert!(conflicts.is_empty());
}

#[test]
fn test_check_unique_is_order_sensitive() {
    let set = custom_set();

    // ["SUPER", "Q"] is bound; ["Q", "SUPER"] is not
    let (unique, conflicts) = set.check_unique("Q, SUPER");
    assert!(unique);
    assert!(conflicts.is_empty());
}

#[test]
fn test_check_unique_is_idempotent() {
    let set = custom_set();

    let first = set.check_unique("SUPER, Q");
    let second = set.check_unique("SUPER, Q");
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_add_reports_conflict() {
    let mut set = custom_set();
    let duplicate = Binding::new("SUPER,Q", "exec, firefox");

    assert!(set.add_binding(duplicate.clone(), AddOrigin::User));
    assert_eq!(set.len(), 3);

    let (unique, conflicts) = set.check_unique("SUPER, Q");
    assert!(!unique);
    assert_eq!(conflicts.len(), 2);
    assert!(conflicts.contains(&&duplicate));
}

#[test]
fn test_user_add_to_custom_set_succeeds() {
    let mut set = BindingSet::new();
    assert!(set.add_binding(Binding::new("ALT, TAB", "cyclenext"), AddOrigin::User));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_user_add_to_default_set_is_refused() {
    let mut set = BindingSet::with_parts(Vec::new(), "SUPER", BindingMode::Default);

    assert!(!set.add_binding(Binding::new("ALT, TAB", "cyclenext"), AddOrigin::User));
    assert_eq!(set.len(), 0);
}

#[test]
fn test_parser_add_to_default_set_succeeds() {
    let mut set = BindingSet::with_parts(Vec::new(), "SUPER", BindingMode::Default);

    assert!(set.add_binding(Binding::new("ALT, TAB", "cyclenext"), AddOrigin::Parser));
    assert_eq!(set.len(), 1);
    assert_eq!(set.mode(), BindingMode::Default);
    assert_eq!(set.modifier_alias(), "SUPER");
}

#[test]
fn test_triggers_longer_than_two_tokens() {
    let mut set = BindingSet::new();
    set.add_binding(Binding::new("SUPER, SHIFT, Q", "exit"), AddOrigin::User);

    assert!(!set.check_unique("SUPER,SHIFT,Q").0);
    assert!(set.check_unique("SUPER,SHIFT").0);
}

#[test]
fn test_search_description_case_insensitive() {
    let mut set = BindingSet::new();
    set.add_binding(Binding::with_description("SUPER, E", "exec, thunar", "Open File Manager"), AddOrigin::User);
    set.add_binding(Binding::with_description("SUPER, B", "exec, firefox", "Browser"), AddOrigin::User);

    let found = set.search_description("file");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].action(), "exec, thunar");

    assert_eq!(set.search_description("   ").len(), 2);
    assert!(set.search_description("music").is_empty());
}

#[test]
fn test_render_preserves_order() {
    let set = custom_set();
    assert_eq!(
        set.render(),
        "bind = SUPER, Q, killactive\nbind = SUPER, RETURN, exec, kitty\n"
    );
}
