//! End-to-end behavior of combinator chains over real stores.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use betterbind::prelude::*;
use betterbind_core::testing::WriteLog;
use betterbind_core::{Observable, bind, bind_field};

#[derive(Clone, Debug, PartialEq)]
struct Contact {
    id: u32,
    name: String,
    email: Option<String>,
    groups: BTreeSet<String>,
}

impl Identifiable for Contact {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

fn contact(id: u32, name: &str) -> Contact {
    Contact {
        id,
        name: name.into(),
        email: None,
        groups: BTreeSet::new(),
    }
}

fn address_book() -> Observable<Vec<Contact>> {
    Observable::new(vec![contact(1, "Ada"), contact(2, "Brian"), contact(3, "Cleo")])
}

type Changes = Rc<RefCell<Vec<(Option<Contact>, Option<Contact>)>>>;

#[derive(Clone)]
struct ChangeLog(Changes);

fn log_change(subject: &ChangeLog, old: &Option<Contact>, new: &Option<Contact>) {
    subject.0.borrow_mut().push((old.clone(), new.clone()));
}

#[test]
fn element_then_default_then_hook() {
    let book = address_book();
    let changes: Changes = Rc::default();
    let draft = contact(4, "");

    let editor = bind!(book)
        .element(4)
        .on_will_set(HashableClosure::new(ChangeLog(Rc::clone(&changes)), log_change))
        .with_default(draft.clone());

    assert_eq!(editor.get(), draft);
    assert_eq!(book.get().len(), 3, "reading the default must not insert");

    editor.set(contact(4, "Dara"));
    let ids: Vec<u32> = book.get().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(changes.borrow().len(), 1);
    assert_eq!(changes.borrow()[0].0, None);

    editor.set(contact(4, "Dara"));
    assert_eq!(changes.borrow().len(), 1, "equal write is suppressed");
}

#[test]
fn field_projection_inside_element() {
    let book = address_book();
    let brian = bind!(book).element(2).with_default(contact(2, ""));
    let name = bind_field!(brian, name);

    name.set("Bryan".into());
    assert_eq!(book.get()[1].name, "Bryan");
    assert_eq!(book.get()[1].id, 2);
    assert_eq!(book.get().len(), 3);
}

#[test]
fn optional_field_toggle() {
    let book = address_book();
    let ada = bind!(book).element(1).with_default(contact(1, ""));
    let email = bind_field!(ada, email);
    let has_email = email.has_value_or(String::from("ada@example.com"));

    assert!(!has_email.get());
    has_email.set(true);
    assert_eq!(book.get()[0].email.as_deref(), Some("ada@example.com"));

    email.with_default(String::new()).set("ada@lovelace.dev".into());
    has_email.set(true);
    assert_eq!(
        book.get()[0].email.as_deref(),
        Some("ada@lovelace.dev"),
        "re-asserting presence keeps the edited value"
    );

    has_email.set(false);
    assert_eq!(book.get()[0].email, None);
}

#[test]
fn group_membership_checkbox() {
    let book = address_book();
    let cleo = bind!(book).element(3).with_default(contact(3, ""));
    let groups = bind_field!(cleo, groups);
    let family = groups.contains(String::from("family"));
    let none = groups.is_empty(BTreeSet::from([String::from("inbox")]));

    assert!(none.get());
    family.set(true);
    assert!(!none.get());
    assert!(book.get()[2].groups.contains("family"));

    none.set(true);
    assert!(!family.get());
}

#[test]
fn gated_selection_hides_but_still_writes() {
    let selected: Observable<Option<u32>> = Observable::new(Some(2));
    let editing = Observable::new(false);

    let visible = bind!(selected).when(editing.get());
    assert_eq!(visible.get(), None);
    visible.set(Some(3));
    assert_eq!(selected.get(), Some(3));

    editing.set(true);
    let visible = bind!(selected).when(editing.get());
    assert_eq!(visible.get(), Some(3));
}

#[test]
fn equals_backed_radio_writes_once() {
    let log = WriteLog::new(2);
    let three = log.binding().equals(3, 0);

    three.set(true);
    three.set(true);
    assert_eq!(log.history(), vec![3]);

    three.set(false);
    assert_eq!(log.value(), 0);
    assert_eq!(log.history(), vec![3, 0]);
}

#[test]
fn as_optional_round_trip_through_none() {
    let count = Observable::new(5);
    let optional = bind!(count).as_optional(0);
    optional.set(None);
    assert_eq!(count.get(), 0);
    assert_eq!(optional.get(), Some(0));

    let back = optional.with_default(-1);
    back.set(9);
    assert_eq!(back.get(), 9);
    assert_eq!(count.get(), 9);
}

#[test]
fn equatable_change_detection() {
    let left = address_book();
    let right = address_book();
    let l = bind!(left).element(1).equatable();
    let r = bind!(right).element(1).equatable();
    assert!(l == r);

    bind!(right).element(1).set(Some(contact(1, "Ada L.")));
    assert!(l != r);

    let l_ids = bind!(left).equatable().project(
        |cs| cs.iter().map(|c| c.id).collect::<Vec<_>>(),
        |_, _| {},
    );
    let r_ids = bind!(right).equatable().project(
        |cs| cs.iter().map(|c| c.id).collect::<Vec<_>>(),
        |_, _| {},
    );
    assert!(l_ids == r_ids, "ids still match even though names differ");
}
