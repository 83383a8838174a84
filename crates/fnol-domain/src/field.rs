//! Field module - the closed canonical field set

/// A canonical FNOL field.
///
/// The set is fixed and exhaustive; extraction never invents or renames
/// fields. Declaration order is the order fields appear in output and the
/// order missing mandatory fields are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Policy identifier
    PolicyNumber,
    /// Name of the policyholder
    PolicyholderName,
    /// Policy effective date range
    EffectiveDates,
    /// Date of loss
    Date,
    /// Time of loss
    Time,
    /// Location of loss
    Location,
    /// Free-text loss description
    Description,
    /// Claimant name
    Claimant,
    /// Other involved parties
    ThirdParties,
    /// Phone and/or email of the reporter
    ContactDetails,
    /// Kind of insured asset (vehicle, property, ...)
    AssetType,
    /// Asset identifier (VIN, serial number, ...)
    AssetId,
    /// Initial monetary damage estimate
    InitialEstimate,
    /// Claim category (property, injury, theft, ...)
    ClaimType,
    /// Listed attachments
    Attachments,
}

impl Field {
    /// All canonical fields, in declaration order.
    pub const ALL: [Field; 15] = [
        Field::PolicyNumber,
        Field::PolicyholderName,
        Field::EffectiveDates,
        Field::Date,
        Field::Time,
        Field::Location,
        Field::Description,
        Field::Claimant,
        Field::ThirdParties,
        Field::ContactDetails,
        Field::AssetType,
        Field::AssetId,
        Field::InitialEstimate,
        Field::ClaimType,
        Field::Attachments,
    ];

    /// The mandatory subset whose absence blocks automatic routing,
    /// in the order missing fields are reported.
    pub const MANDATORY: [Field; 10] = [
        Field::PolicyNumber,
        Field::PolicyholderName,
        Field::EffectiveDates,
        Field::Date,
        Field::Location,
        Field::Description,
        Field::Claimant,
        Field::AssetType,
        Field::InitialEstimate,
        Field::ClaimType,
    ];

    /// The human-readable label used in documents and in JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            Field::PolicyNumber => "Policy Number",
            Field::PolicyholderName => "Policyholder Name",
            Field::EffectiveDates => "Effective Dates",
            Field::Date => "Date",
            Field::Time => "Time",
            Field::Location => "Location",
            Field::Description => "Description",
            Field::Claimant => "Claimant",
            Field::ThirdParties => "Third Parties",
            Field::ContactDetails => "Contact Details",
            Field::AssetType => "Asset Type",
            Field::AssetId => "Asset ID",
            Field::InitialEstimate => "Initial Estimate",
            Field::ClaimType => "Claim Type",
            Field::Attachments => "Attachments",
        }
    }

    /// Look a field up by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Field::ALL.iter().copied().find(|f| f.label() == label)
    }

    /// Whether this field is in the mandatory subset.
    pub fn is_mandatory(&self) -> bool {
        Field::MANDATORY.contains(self)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
