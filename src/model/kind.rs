//! UML declared-type vocabulary and element classification.

/// Element kinds in the known UML vocabulary.
///
/// The traversal refuses documents declaring any type outside this
/// vocabulary rather than guessing; see [`UmlKind::from_xmi_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UmlKind {
    // Namespace containers
    Model,
    Package,
    Profile,

    // Classifiers that may be emitted as data types
    AssociationClass,
    Class,
    DataType,
    Enumeration,
    Stereotype,

    // Owned members
    Association,
    EnumerationLiteral,
    ExtensionEnd,
    Operation,
    Parameter,
    Property,

    // Known kinds with no module-tree mapping
    Actor,
    Collaboration,
    InstanceSpecification,
    Node,
    Signal,
    SignalEvent,
    StateMachine,
}

impl UmlKind {
    /// Parses a declared-type attribute value such as `uml:DataType`.
    ///
    /// Returns `None` for tags outside the known vocabulary; callers treat
    /// that as fatal.
    pub fn from_xmi_type(xmi_type: &str) -> Option<Self> {
        // Strip namespace prefix if present
        let type_name = xmi_type.rsplit(':').next().unwrap_or(xmi_type);

        match type_name {
            "Model" => Some(Self::Model),
            "Package" => Some(Self::Package),
            "Profile" => Some(Self::Profile),
            "AssociationClass" => Some(Self::AssociationClass),
            "Class" => Some(Self::Class),
            "DataType" => Some(Self::DataType),
            "Enumeration" => Some(Self::Enumeration),
            "Stereotype" => Some(Self::Stereotype),
            "Association" => Some(Self::Association),
            "EnumerationLiteral" => Some(Self::EnumerationLiteral),
            "ExtensionEnd" => Some(Self::ExtensionEnd),
            "Operation" => Some(Self::Operation),
            "Parameter" => Some(Self::Parameter),
            "Property" => Some(Self::Property),
            "Actor" => Some(Self::Actor),
            "Collaboration" => Some(Self::Collaboration),
            "InstanceSpecification" => Some(Self::InstanceSpecification),
            "Node" => Some(Self::Node),
            "Signal" => Some(Self::Signal),
            "SignalEvent" => Some(Self::SignalEvent),
            "StateMachine" => Some(Self::StateMachine),
            _ => None,
        }
    }

    /// The declared-type tag as it appears in the document.
    pub fn xmi_type(self) -> &'static str {
        match self {
            Self::Model => "uml:Model",
            Self::Package => "uml:Package",
            Self::Profile => "uml:Profile",
            Self::AssociationClass => "uml:AssociationClass",
            Self::Class => "uml:Class",
            Self::DataType => "uml:DataType",
            Self::Enumeration => "uml:Enumeration",
            Self::Stereotype => "uml:Stereotype",
            Self::Association => "uml:Association",
            Self::EnumerationLiteral => "uml:EnumerationLiteral",
            Self::ExtensionEnd => "uml:ExtensionEnd",
            Self::Operation => "uml:Operation",
            Self::Parameter => "uml:Parameter",
            Self::Property => "uml:Property",
            Self::Actor => "uml:Actor",
            Self::Collaboration => "uml:Collaboration",
            Self::InstanceSpecification => "uml:InstanceSpecification",
            Self::Node => "uml:Node",
            Self::Signal => "uml:Signal",
            Self::SignalEvent => "uml:SignalEvent",
            Self::StateMachine => "uml:StateMachine",
        }
    }

    /// Namespace containers: contribute a normalized path segment, never
    /// emitted themselves.
    pub fn is_namespace(self) -> bool {
        matches!(self, Self::Model | Self::Package | Self::Profile)
    }

    /// Classifier kinds eligible for emission as data types.
    pub fn is_classifier(self) -> bool {
        matches!(
            self,
            Self::AssociationClass
                | Self::Class
                | Self::DataType
                | Self::Enumeration
                | Self::Stereotype
        )
    }

    /// Known kinds that never map onto the module tree.
    pub fn is_auxiliary(self) -> bool {
        matches!(
            self,
            Self::Actor
                | Self::Collaboration
                | Self::InstanceSpecification
                | Self::Node
                | Self::Signal
                | Self::SignalEvent
                | Self::StateMachine
        )
    }
}

/// What the traversal does with an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Namespace container: contributes a snake_cased path segment.
    Container,
    /// Configured data-type kind: contributes a segment and records the
    /// current path as a qualified name.
    LeafCandidate,
    /// Recognized element that occupies the path while open but is never
    /// recorded.
    Member,
    /// Excluded from path construction entirely.
    Skip,
}

/// Configuration for one scan pass.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Declared-type kinds recorded as data types.
    pub emit_kinds: Vec<UmlKind>,
    /// Name of the root namespace. Stripped as a `::` prefix from element
    /// names; elements carrying the bare name contribute no visible segment.
    pub root_namespace: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            emit_kinds: vec![UmlKind::DataType],
            root_namespace: "Protocol".to_string(),
        }
    }
}

impl ScanConfig {
    /// Configuration recording every classifier kind, not only `DataType`.
    pub fn all_classifiers() -> Self {
        Self {
            emit_kinds: vec![
                UmlKind::AssociationClass,
                UmlKind::Class,
                UmlKind::DataType,
                UmlKind::Enumeration,
                UmlKind::Stereotype,
            ],
            ..Self::default()
        }
    }

    /// Classifies an element by declared type and name.
    ///
    /// Names containing line breaks or the `:=` marker denote literal or
    /// derived values rather than model namespaces or types.
    pub fn classify(&self, kind: UmlKind, name: &str) -> Disposition {
        if name.contains('\n') || name.contains(":=") {
            return Disposition::Skip;
        }
        if kind.is_namespace() {
            Disposition::Container
        } else if self.emit_kinds.contains(&kind) {
            Disposition::LeafCandidate
        } else {
            Disposition::Member
        }
    }
}
