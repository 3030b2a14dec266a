//! Traversal behavior over synthetic model documents.

use xmigen::{QualifiedName, ScanConfig, UmlKind, scan_document};

fn joined(doc: &[u8], config: &ScanConfig) -> Vec<String> {
    let discovered = scan_document(doc, config).expect("scan failed");
    discovered.sorted().iter().map(QualifiedName::join).collect()
}

// A repeated container name must collapse to a placeholder: the duplicate
// keeps stack depth but stays out of the qualified names, and both sibling
// types below it remain correctly rooted.
#[test]
fn repeated_container_name_keeps_sibling_paths_rooted() {
    let doc = br#"<?xml version="1.0" encoding="UTF-8"?>
<xmi:XMI xmlns:xmi="http://www.omg.org/XMI" xmlns:uml="http://www.omg.org/spec/UML/20110701">
  <uml:Model xmi:type="uml:Model" name="DDSI-RTPS">
    <packagedElement xmi:type="uml:Package" name="Protocol">
      <packagedElement xmi:type="uml:Package" name="Structure">
        <packagedElement xmi:type="uml:Package" name="Structure">
          <packagedElement xmi:type="uml:DataType" name="Locator_t"/>
          <packagedElement xmi:type="uml:DataType" name="GuidPrefix_t"/>
        </packagedElement>
      </packagedElement>
    </packagedElement>
  </uml:Model>
</xmi:XMI>"#;

    assert_eq!(
        joined(doc, &ScanConfig::default()),
        ["structure::GuidPrefix_t", "structure::Locator_t"]
    );
}

#[test]
fn siblings_after_a_repeated_container_are_unaffected() {
    let doc = br#"<?xml version="1.0"?>
<xmi:XMI xmlns:xmi="http://www.omg.org/XMI" xmlns:uml="http://www.omg.org/spec/UML/20110701">
  <uml:Model xmi:type="uml:Model" name="DDSI-RTPS">
    <packagedElement xmi:type="uml:Package" name="Protocol">
      <packagedElement xmi:type="uml:Package" name="Behavior">
        <packagedElement xmi:type="uml:Package" name="Behavior">
          <packagedElement xmi:type="uml:DataType" name="Duration_t"/>
        </packagedElement>
        <packagedElement xmi:type="uml:DataType" name="ChangeForReaderStatusKind"/>
      </packagedElement>
      <packagedElement xmi:type="uml:Package" name="Structure">
        <packagedElement xmi:type="uml:DataType" name="Locator_t"/>
      </packagedElement>
    </packagedElement>
  </uml:Model>
</xmi:XMI>"#;

    assert_eq!(
        joined(doc, &ScanConfig::default()),
        [
            "behavior::ChangeForReaderStatusKind",
            "behavior::Duration_t",
            "structure::Locator_t",
        ]
    );
}

// A type declared directly under the root namespace has a single-segment
// qualified name; the namespace itself never shows up.
#[test]
fn root_namespace_is_not_a_visible_segment() {
    let doc = br#"<?xml version="1.0"?>
<xmi:XMI xmlns:xmi="http://www.omg.org/XMI" xmlns:uml="http://www.omg.org/spec/UML/20110701">
  <uml:Model xmi:type="uml:Model" name="DDSI-RTPS">
    <packagedElement xmi:type="uml:Package" name="Protocol">
      <packagedElement xmi:type="uml:DataType" name="SubmessageHeader"/>
    </packagedElement>
  </uml:Model>
</xmi:XMI>"#;

    assert_eq!(joined(doc, &ScanConfig::default()), ["SubmessageHeader"]);
}

#[test]
fn two_scans_produce_identical_ordering() {
    let doc = br#"<?xml version="1.0"?>
<xmi:XMI xmlns:xmi="http://www.omg.org/XMI" xmlns:uml="http://www.omg.org/spec/UML/20110701">
  <uml:Model xmi:type="uml:Model" name="DDSI-RTPS">
    <packagedElement xmi:type="uml:Package" name="Protocol">
      <packagedElement xmi:type="uml:Package" name="Messages">
        <packagedElement xmi:type="uml:DataType" name="SubmessageHeader"/>
        <packagedElement xmi:type="uml:DataType" name="Pad"/>
      </packagedElement>
      <packagedElement xmi:type="uml:Package" name="Structure">
        <packagedElement xmi:type="uml:DataType" name="Locator_t"/>
      </packagedElement>
    </packagedElement>
  </uml:Model>
</xmi:XMI>"#;

    let config = ScanConfig::default();
    let first = joined(doc, &config);
    let second = joined(doc, &config);
    assert_eq!(first, second);
    assert_eq!(
        first,
        [
            "messages::Pad",
            "messages::SubmessageHeader",
            "structure::Locator_t",
        ]
    );
}

#[test]
fn qualified_names_are_unique_by_joined_rendering() {
    let doc = br#"<?xml version="1.0"?>
<xmi:XMI xmlns:xmi="http://www.omg.org/XMI" xmlns:uml="http://www.omg.org/spec/UML/20110701">
  <uml:Model xmi:type="uml:Model" name="DDSI-RTPS">
    <packagedElement xmi:type="uml:Package" name="Protocol">
      <packagedElement xmi:type="uml:Package" name="Structure">
        <packagedElement xmi:type="uml:DataType" name="EntityId_t"/>
        <packagedElement xmi:type="uml:DataType" name="EntityId_t1"/>
      </packagedElement>
    </packagedElement>
  </uml:Model>
</xmi:XMI>"#;

    // The trailing `1` marks a duplicated sibling; both collapse to one name.
    let discovered = scan_document(doc, &ScanConfig::default()).expect("scan failed");
    let rendered: Vec<String> = discovered.iter().map(QualifiedName::join).collect();
    assert_eq!(rendered, ["structure::EntityId_t"]);
}

// Enumerations and their literals are recognized vocabulary; with the
// default configuration they shape the path but are never recorded.
#[test]
fn enumerations_are_recorded_only_when_configured() {
    let doc = br#"<?xml version="1.0"?>
<xmi:XMI xmlns:xmi="http://www.omg.org/XMI" xmlns:uml="http://www.omg.org/spec/UML/20110701">
  <uml:Model xmi:type="uml:Model" name="DDSI-RTPS">
    <packagedElement xmi:type="uml:Package" name="Protocol">
      <packagedElement xmi:type="uml:Enumeration" name="ReliabilityKind_t">
        <ownedLiteral xmi:type="uml:EnumerationLiteral" name="BEST_EFFORT"/>
        <ownedLiteral xmi:type="uml:EnumerationLiteral" name="RELIABLE"/>
      </packagedElement>
      <packagedElement xmi:type="uml:DataType" name="Locator_t"/>
    </packagedElement>
  </uml:Model>
</xmi:XMI>"#;

    assert_eq!(joined(doc, &ScanConfig::default()), ["Locator_t"]);

    let wide = ScanConfig {
        emit_kinds: vec![UmlKind::DataType, UmlKind::Enumeration],
        ..ScanConfig::default()
    };
    assert_eq!(joined(doc, &wide), ["Locator_t", "ReliabilityKind_t"]);
}

#[test]
fn operations_and_parameters_shape_paths_without_registering() {
    let doc = br#"<?xml version="1.0"?>
<xmi:XMI xmlns:xmi="http://www.omg.org/XMI" xmlns:uml="http://www.omg.org/spec/UML/20110701">
  <uml:Model xmi:type="uml:Model" name="DDSI-RTPS">
    <packagedElement xmi:type="uml:Package" name="Protocol">
      <packagedElement xmi:type="uml:Class" name="RTPSWriter">
        <ownedOperation xmi:type="uml:Operation" name="new_change">
          <ownedParameter xmi:type="uml:Parameter" name="kind"/>
        </ownedOperation>
      </packagedElement>
      <packagedElement xmi:type="uml:DataType" name="SequenceNumber_t"/>
    </packagedElement>
  </uml:Model>
</xmi:XMI>"#;

    assert_eq!(joined(doc, &ScanConfig::default()), ["SequenceNumber_t"]);
}
