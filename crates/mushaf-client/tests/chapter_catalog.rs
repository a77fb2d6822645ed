// Chapter catalog behaviour over the fixture transport.
mod support;

use std::collections::HashSet;

use anyhow::Result;
use mushaf_client::{ChapterCatalog, MushafError, Notation, Order, RevelationPlace};

use support::{FixtureTransport, config, init_tracing};

fn catalog() -> ChapterCatalog<FixtureTransport> {
    init_tracing();
    ChapterCatalog::with_transport(config(), FixtureTransport::healthy()).expect("catalog")
}

#[test]
fn construction_fetches_listing_once() -> Result<()> {
    let catalog = catalog();
    assert!(catalog.is_available());
    assert_eq!(catalog.status(), 200);

    catalog.list_names(Notation::Simple, Order::Canonical)?;
    catalog.get_number("Al-Kahf")?;
    catalog.list_by_place(RevelationPlace::Makkah, Notation::Complex)?;

    assert_eq!(
        catalog.transport().requests(),
        vec!["http://fixture.test/api/v4/chapters?language=en".to_string()]
    );
    Ok(())
}

#[test]
fn simple_canonical_names() -> Result<()> {
    let catalog = catalog();
    let names = catalog.list_names(Notation::Simple, Order::Canonical)?;
    assert_eq!(names.len(), 114);
    assert_eq!(names[0], catalog.chapters()?[0].name_simple);
    assert_eq!(names[0], "Al-Fatihah");
    Ok(())
}

#[test]
fn revelation_order_lists() -> Result<()> {
    let catalog = catalog();
    let simple = catalog.list_names(Notation::Simple, Order::Revelation)?;
    let complex = catalog.list_names(Notation::Complex, Order::Revelation)?;
    assert_eq!(&simple[..3], ["Al-'Alaq", "Al-Qalam", "Al-Muzzammil"]);
    assert_eq!(complex[0], "Al-`Alaq");
    assert_eq!(simple.last().map(String::as_str), Some("An-Nasr"));
    Ok(())
}

#[test]
fn every_chapter_found_by_both_names() -> Result<()> {
    let catalog = catalog();
    for chapter in catalog.chapters()? {
        assert_eq!(catalog.find_by_name(&chapter.name_simple)?.id, chapter.id);
        assert_eq!(catalog.find_by_name(&chapter.name_complex)?.id, chapter.id);
    }
    Ok(())
}

#[test]
fn places_partition_the_chapter_set() -> Result<()> {
    let catalog = catalog();
    let makkah = catalog.list_by_place(RevelationPlace::Makkah, Notation::Simple)?;
    let madinah = catalog.list_by_place(RevelationPlace::Madinah, Notation::Simple)?;

    let makkah_set: HashSet<_> = makkah.iter().collect();
    let madinah_set: HashSet<_> = madinah.iter().collect();
    assert!(makkah_set.is_disjoint(&madinah_set));

    let all: HashSet<String> = catalog
        .list_names(Notation::Simple, Order::Canonical)?
        .into_iter()
        .collect();
    let union: HashSet<String> = makkah.into_iter().chain(madinah).collect();
    assert_eq!(union, all);
    Ok(())
}

#[test]
fn chapter_by_number_bounds() -> Result<()> {
    let catalog = catalog();
    let first = catalog.get_chapter_by_number(1)?;
    assert_eq!((first.simple.as_str(), first.complex.as_str()), ("Al-Fatihah", "Al-Fātiĥah"));
    let last = catalog.get_chapter_by_number(114)?;
    assert_eq!(last.simple, "An-Nas");

    let before = catalog.transport().requests().len();
    for bad in [0, 115, -1] {
        assert!(matches!(
            catalog.get_chapter_by_number(bad),
            Err(MushafError::InvalidArgument { name: "number", .. })
        ));
        assert!(matches!(
            catalog.get_revelation_order_by_number(bad),
            Err(MushafError::InvalidArgument { .. })
        ));
    }
    assert_eq!(catalog.transport().requests().len(), before);
    Ok(())
}

#[test]
fn chapter_by_number_uses_single_chapter_endpoint() -> Result<()> {
    let catalog = catalog();
    assert_eq!(catalog.get_revelation_order_by_number(1)?, 5);
    assert_eq!(catalog.get_revelation_order_by_number(96)?, 1);
    let requests = catalog.transport().requests();
    assert_eq!(
        requests.last().map(String::as_str),
        Some("http://fixture.test/api/v4/chapters/96?language=en")
    );
    Ok(())
}

#[test]
fn single_chapter_failure_is_explicit() {
    init_tracing();
    let mut transport = FixtureTransport::healthy();
    transport.route("http://fixture.test/api/v4/chapters/7?language=en", 502, "bad gateway");
    let catalog = ChapterCatalog::with_transport(config(), transport).unwrap();

    match catalog.get_chapter_by_number(7) {
        Err(MushafError::RemoteUnavailable { status, url }) => {
            assert_eq!(status, 502);
            assert!(url.ends_with("/chapters/7?language=en"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    // The retained listing is unaffected.
    assert_eq!(catalog.get_number("Al-A'raf").unwrap(), 7);
}

#[test]
fn mismatched_single_chapter_is_rejected() {
    init_tracing();
    let mut transport = FixtureTransport::healthy();
    let body = r#"{"chapter": {
        "id": 2, "revelation_place": "madinah", "revelation_order": 87,
        "name_simple": "Al-Baqarah", "name_complex": "Al-Baqarah", "name_arabic": "البقرة",
        "verses_count": 286, "translated_name": {"name": "The Cow", "language_name": "english"}
    }}"#;
    transport.route("http://fixture.test/api/v4/chapters/3?language=en", 200, body);
    let catalog = ChapterCatalog::with_transport(config(), transport).unwrap();
    assert!(matches!(
        catalog.get_chapter_by_number(3),
        Err(MushafError::InvalidPayload(_))
    ));
}

#[test]
fn translated_name_round_trip() -> Result<()> {
    let catalog = catalog();
    for chapter in catalog.chapters()? {
        for name in [&chapter.name_simple, &chapter.name_complex] {
            let translated = catalog.get_translated_name(name)?;
            let names = catalog.get_name_by_translated_name(&translated)?;
            assert!(names.simple == *name || names.complex == *name);
        }
    }
    assert_eq!(catalog.get_translated_name("Al-Fatihah")?, "The Opener");
    Ok(())
}

#[test]
fn revelation_orders_form_a_permutation() -> Result<()> {
    let catalog = catalog();
    let mut orders = Vec::new();
    for name in catalog.list_names(Notation::Simple, Order::Canonical)? {
        orders.push(catalog.get_revelation_order(&name)?);
    }
    orders.sort_unstable();
    assert_eq!(orders, (1..=114).collect::<Vec<u32>>());
    Ok(())
}

#[test]
fn per_name_lookups() -> Result<()> {
    let catalog = catalog();
    assert_eq!(catalog.get_number("Ya-Sin")?, 36);
    assert_eq!(catalog.get_arabic("Al-Ikhlas")?, "الإخلاص");
    assert_eq!(catalog.get_revelation_place("Al-Hujurat")?, RevelationPlace::Madinah);
    assert_eq!(catalog.get_verse_count("Al-Kawthar")?, 3);
    assert_eq!(catalog.get_revelation_order("Al-Mulk")?, 77);

    let names = catalog.get_chapter_by_revelation_order(5)?;
    assert_eq!(names.simple, "Al-Fatihah");
    assert_eq!(catalog.list_arabic_names()?.len(), 114);
    assert_eq!(catalog.list_translated_names()?[113], "Mankind");
    Ok(())
}

#[test]
fn unknown_names_are_not_found() {
    let catalog = catalog();
    let err = catalog.get_number("Al-Kahff").unwrap_err();
    assert_eq!(
        err.to_string(),
        "no chapter with name \"Al-Kahff\" (did you mean \"Al-Kahf\"?)"
    );
    assert!(matches!(
        catalog.get_name_by_translated_name("The Lighthouse"),
        Err(MushafError::NotFound { what: "translated name", .. })
    ));
    assert!(matches!(
        catalog.get_verse_count(""),
        Err(MushafError::NotFound { .. })
    ));
}

#[test]
fn non_200_listing_makes_every_query_fail() {
    init_tracing();
    let catalog = ChapterCatalog::with_transport(config(), FixtureTransport::failing(503))
        .expect("construction keeps the status");
    assert!(!catalog.is_available());
    assert_eq!(catalog.status(), 503);

    let unavailable = |result: Result<(), MushafError>| {
        matches!(result, Err(MushafError::RemoteUnavailable { status: 503, .. }))
    };
    assert!(unavailable(catalog.list_names(Notation::Simple, Order::Canonical).map(drop)));
    assert!(unavailable(catalog.list_arabic_names().map(drop)));
    assert!(unavailable(catalog.list_translated_names().map(drop)));
    assert!(unavailable(
        catalog.list_by_place(RevelationPlace::Makkah, Notation::Simple).map(drop)
    ));
    assert!(unavailable(catalog.find_by_name("Al-Fatihah").map(drop)));
    assert!(unavailable(catalog.get_translated_name("Al-Fatihah").map(drop)));
    assert!(unavailable(catalog.get_number("Al-Fatihah").map(drop)));
    assert!(unavailable(catalog.get_arabic("Al-Fatihah").map(drop)));
    assert!(unavailable(catalog.get_revelation_place("Al-Fatihah").map(drop)));
    assert!(unavailable(catalog.get_revelation_order("Al-Fatihah").map(drop)));
    assert!(unavailable(catalog.get_verse_count("Al-Fatihah").map(drop)));
    assert!(unavailable(catalog.get_name_by_translated_name("The Opener").map(drop)));
    assert!(unavailable(catalog.get_chapter_by_revelation_order(1).map(drop)));
    assert!(unavailable(catalog.get_chapter_by_number(1).map(drop)));
    assert!(unavailable(catalog.get_revelation_order_by_number(1).map(drop)));
    assert!(unavailable(catalog.chapters().map(drop)));

    // Argument errors still win over availability.
    assert!(matches!(
        catalog.get_chapter_by_revelation_order(0),
        Err(MushafError::InvalidArgument { .. })
    ));
}

#[test]
fn transport_failure_fails_construction() {
    init_tracing();
    let err = ChapterCatalog::with_transport(config(), FixtureTransport::default()).unwrap_err();
    assert!(matches!(err, MushafError::Transport { .. }));
}

#[test]
fn malformed_listing_fails_construction() {
    init_tracing();
    let mut transport = FixtureTransport::default();
    transport.route(
        "http://fixture.test/api/v4/chapters?language=en",
        200,
        r#"{"chapters": []}"#,
    );
    let err = ChapterCatalog::with_transport(config(), transport).unwrap_err();
    assert!(matches!(err, MushafError::InvalidPayload(_)));

    let mut transport = FixtureTransport::default();
    transport.route("http://fixture.test/api/v4/chapters?language=en", 200, "<html>");
    let err = ChapterCatalog::with_transport(config(), transport).unwrap_err();
    assert!(matches!(err, MushafError::Decode(_)));
}

#[test]
fn invalid_config_is_rejected_before_fetching() {
    let transport = FixtureTransport::healthy();
    let err = ChapterCatalog::with_transport(config().with_language(""), &transport).unwrap_err();
    assert!(matches!(err, MushafError::Config(_)));
    assert!(transport.requests().is_empty());
}
