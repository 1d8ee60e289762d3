//! Tests for building the alias maps from classmap source text

use stubgen::ClassMaps;

const CLASSMAP: &str = r"<?php
/**
 * Joomla legacy classmap.
 */
defined('_JEXEC') or die;

JLoader::registerAlias('JFoo', 'Joomla\\CMS\\Foo', '3.9.0');
JLoader::registerAlias('JBar', 'Joomla\\CMS\\Bar');
// JLoader::registerAlias('JDisabled', 'Joomla\\CMS\\Disabled');
JLoader::register('JNotAnAlias', __DIR__ . '/notanalias.php');
JLoader::registerAlias('JBaz', 'Joomla\\CMS\\Baz', '4.0.0');
";

#[test]
fn test_build_from_classmap_blob() {
    let maps = ClassMaps::from_source(CLASSMAP).expect("Builder should not fail");

    assert_eq!(maps.len(), 3, "Exactly the three live registrations");
    assert_eq!(maps.classes["JFoo"], r"Joomla\CMS\Foo");
    assert_eq!(maps.classes["JBar"], r"Joomla\CMS\Bar");
    assert_eq!(maps.classes["JBaz"], r"Joomla\CMS\Baz");

    assert_eq!(maps.versions["JFoo"], "3.9.0");
    assert_eq!(maps.versions["JBar"], "4.0", "Omitted version defaults");
    assert_eq!(maps.versions["JBaz"], "4.0.0");

    assert_eq!(
        maps.classes.keys().collect::<Vec<_>>(),
        maps.versions.keys().collect::<Vec<_>>(),
        "Both maps must share the same key set"
    );
}

#[test]
fn test_malformed_lines_are_skipped_silently() {
    let source = "JLoader::registerAlias('JFoo', 'Joomla\\\\CMS\\\\Foo');\n\
                  JLoader::registerAlias('broken\n\
                  complete garbage @@@\n\
                  JLoader::registerAlias($var, 'X');\n";

    let maps = ClassMaps::from_source(source).expect("No line failure aborts the build");
    assert_eq!(maps.len(), 1);
    assert!(maps.classes.contains_key("JFoo"));
}

#[test]
fn test_duplicate_alias_last_write_wins() {
    let source = "JLoader::registerAlias('JFoo', 'Joomla\\\\CMS\\\\Old', '3.0.0');\n\
                  JLoader::registerAlias('JFoo', 'Joomla\\\\CMS\\\\New', '3.9.0');\n";

    let maps = ClassMaps::from_source(source).expect("build");
    assert_eq!(maps.len(), 1);
    assert_eq!(
        maps.classes["JFoo"], r"Joomla\CMS\New",
        "Later registration must overwrite the earlier one"
    );
    assert_eq!(maps.versions["JFoo"], "3.9.0");
}

#[test]
fn test_crlf_line_endings_are_normalized() {
    let source = "JLoader::registerAlias('JFoo', 'Joomla\\\\CMS\\\\Foo');\r\n\
                  JLoader::registerAlias('JBar', 'Joomla\\\\CMS\\\\Bar');\r\n";

    let maps = ClassMaps::from_source(source).expect("build");
    assert_eq!(maps.len(), 2);
    assert_eq!(maps.classes["JFoo"], r"Joomla\CMS\Foo");
}

#[test]
fn test_building_twice_yields_identical_maps() {
    let first = ClassMaps::from_source(CLASSMAP).expect("first build");
    let second = ClassMaps::from_source(CLASSMAP).expect("second build");
    assert_eq!(first, second, "Builds over identical input are identical");
}

#[test]
fn test_empty_input_yields_empty_maps() {
    let maps = ClassMaps::from_source("").expect("build");
    assert!(maps.is_empty());
}
