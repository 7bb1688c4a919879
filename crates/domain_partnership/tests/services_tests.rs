//! Service Tests
//!
//! The submission services wired to in-memory collaborators: resource
//! linking, completeness, costs and filing assembly.

use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;

use core_kernel::{OperationMetadata, PortError};
use domain_partnership::adapters::{InMemoryCompanyProfiles, InMemoryTransactions};
use domain_partnership::{
    Address, CostsConfig, Country, FilingMode, GeneralPartnerData, Jurisdiction, Nationality,
    PartnerData, PartnershipData, PartnershipError, PartnershipNameEnding, PartnershipPorts,
    PartnershipServices, PartnershipType, PersonDetails, PostTransitionKind, Transaction,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

struct Harness {
    services: PartnershipServices,
    transactions: Arc<InMemoryTransactions>,
}

impl Harness {
    async fn with_transaction(transaction: Transaction) -> Self {
        let transactions = Arc::new(InMemoryTransactions::new());
        transactions.insert(transaction).await;
        let ports = PartnershipPorts::in_memory(
            Arc::new(InMemoryCompanyProfiles::new()),
            transactions.clone(),
        );
        Self {
            services: PartnershipServices::new(ports, CostsConfig::default()),
            transactions,
        }
    }

    async fn registration() -> Self {
        Self::with_transaction(Transaction::new("txn-1", FilingMode::Registration)).await
    }
}

fn metadata() -> Option<OperationMetadata> {
    Some(OperationMetadata::with_correlation_id("req-1").initiated_by("user-1"))
}

fn address() -> Address {
    Address::new("2", "Bridge Street", "Bristol", "BS1 4DJ", Country::England)
}

fn jack_jones() -> GeneralPartnerData {
    let mut data = GeneralPartnerData::new(PartnerData::person(PersonDetails {
        forename: Some("Jack".to_string()),
        surname: Some("Jones".to_string()),
        date_of_birth: NaiveDate::from_ymd_opt(2000, 10, 3),
        nationality1: Some(Nationality::British),
        usual_residential_address: Some(address()),
        ..Default::default()
    }));
    data.service_address = Some(address());
    data.not_disqualified_statement_checked = Some(true);
    data
}

fn registered_partnership() -> PartnershipData {
    PartnershipData {
        partnership_name: Some("Bridge Street Ventures".to_string()),
        name_ending: Some(PartnershipNameEnding::LimitedPartnership),
        email: Some("partners@example.com".to_string()),
        jurisdiction: Some(Jurisdiction::EnglandAndWales),
        registered_office_address: Some(address()),
        principal_place_of_business_address: Some(address()),
        lawful_purpose_statement_checked: Some(true),
        partnership_type: Some(PartnershipType::Pflp),
        ..Default::default()
    }
}

fn is_not_found(error: &PartnershipError) -> bool {
    matches!(
        error,
        PartnershipError::ResourceNotFound(_) | PartnershipError::Port(PortError::NotFound { .. })
    )
}

// ============================================================================
// GENERAL PARTNERS
// ============================================================================

mod general_partners {
    use super::*;

    #[tokio::test]
    async fn test_create_links_the_partner_to_the_transaction() {
        let harness = Harness::registration().await;
        let view = harness
            .services
            .general_partners
            .create("txn-1", jack_jones(), metadata())
            .await
            .unwrap();

        assert!(view.completed);
        assert_eq!(view.created_by.as_deref(), Some("user-1"));

        let fetched = harness.services.general_partners.get("txn-1", &view.id).await.unwrap();
        assert_eq!(fetched.data, view.data);

        let listed = harness.services.general_partners.list("txn-1").await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_incomplete_partner_is_stored_but_not_completed() {
        let harness = Harness::registration().await;
        let mut data = jack_jones();
        data.service_address = None;

        let view = harness
            .services
            .general_partners
            .create("txn-1", data, None)
            .await
            .unwrap();
        assert!(!view.completed);

        let status = harness
            .services
            .general_partners
            .validation_status("txn-1", &view.id)
            .await
            .unwrap();
        assert!(!status.is_valid);
        assert_eq!(status.errors.len(), 1);
        assert_eq!(status.errors[0].location, "data.serviceAddress");
    }

    #[tokio::test]
    async fn test_create_rejects_unidentified_partner() {
        let harness = Harness::registration().await;
        let error = harness
            .services
            .general_partners
            .create("txn-1", GeneralPartnerData::new(PartnerData::default()), None)
            .await
            .unwrap_err();

        let errors = error.validation_errors().unwrap();
        assert!(errors.iter().any(|e| e.error == "Some fields are missing"));
        assert!(harness.services.general_partners.list("txn-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_applies_merge_patch() {
        let harness = Harness::registration().await;
        let view = harness
            .services
            .general_partners
            .create("txn-1", jack_jones(), None)
            .await
            .unwrap();

        let updated = harness
            .services
            .general_partners
            .update("txn-1", &view.id, &json!({ "forename": "John" }))
            .await
            .unwrap();

        let person = updated.data.partner.as_person().unwrap();
        assert_eq!(person.forename.as_deref(), Some("John"));
        assert_eq!(person.surname.as_deref(), Some("Jones"));
    }

    #[tokio::test]
    async fn test_update_cannot_change_kind() {
        let harness = Harness::registration().await;
        let view = harness
            .services
            .general_partners
            .create("txn-1", jack_jones(), None)
            .await
            .unwrap();

        let error = harness
            .services
            .general_partners
            .update(
                "txn-1",
                &view.id,
                &json!({ "kind": PostTransitionKind::RemoveGeneralPartnerPerson.description() }),
            )
            .await
            .unwrap_err();
        assert!(matches!(error, PartnershipError::Service(_)));
    }

    #[tokio::test]
    async fn test_update_into_mixed_partner_data_is_an_invalid_request() {
        let harness = Harness::registration().await;
        let view = harness
            .services
            .general_partners
            .create("txn-1", jack_jones(), None)
            .await
            .unwrap();

        let error = harness
            .services
            .general_partners
            .update("txn-1", &view.id, &json!({ "legal_entity_name": "Acme Holdings" }))
            .await
            .unwrap_err();
        assert!(matches!(error, PartnershipError::InvalidRequest(_)), "{error:?}");
        assert!(error
            .to_string()
            .contains("Partner cannot have both person and legal entity details"));

        let stored = harness.services.general_partners.get("txn-1", &view.id).await.unwrap();
        assert_eq!(stored.data, view.data);
    }

    #[tokio::test]
    async fn test_update_with_malformed_date_is_an_invalid_request() {
        let harness = Harness::registration().await;
        let view = harness
            .services
            .general_partners
            .create("txn-1", jack_jones(), None)
            .await
            .unwrap();

        let error = harness
            .services
            .general_partners
            .update("txn-1", &view.id, &json!({ "date_of_birth": "3rd October" }))
            .await
            .unwrap_err();
        assert!(matches!(error, PartnershipError::InvalidRequest(_)), "{error:?}");
    }

    #[tokio::test]
    async fn test_kind_of_another_resource_is_refused_before_storing() {
        let harness = Harness::registration().await;
        let mut data = jack_jones();
        data.partner.kind = Some(PostTransitionKind::AddLimitedPartnerPerson.description().to_string());

        let error = harness
            .services
            .general_partners
            .create("txn-1", data, None)
            .await
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Strategy for kind limited-partnership#add-limited-partner-person cannot validate a general partner"
        );

        assert!(harness.services.general_partners.list("txn-1").await.unwrap().is_empty());
        harness
            .services
            .general_partners
            .create("txn-1", jack_jones(), None)
            .await
            .unwrap();
        assert_eq!(harness.services.general_partners.list("txn-1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unlinks_the_partner() {
        let harness = Harness::registration().await;
        let view = harness
            .services
            .general_partners
            .create("txn-1", jack_jones(), None)
            .await
            .unwrap();

        harness
            .services
            .general_partners
            .delete("txn-1", &view.id, metadata())
            .await
            .unwrap();

        let error = harness.services.general_partners.get("txn-1", &view.id).await.unwrap_err();
        assert!(is_not_found(&error));
    }

    #[tokio::test]
    async fn test_partner_of_another_transaction_is_not_found() {
        let harness = Harness::registration().await;
        harness
            .transactions
            .insert(Transaction::new("txn-2", FilingMode::Registration))
            .await;
        let view = harness
            .services
            .general_partners
            .create("txn-1", jack_jones(), None)
            .await
            .unwrap();

        let error = harness.services.general_partners.get("txn-2", &view.id).await.unwrap_err();
        assert!(matches!(error, PartnershipError::ResourceNotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_transaction_is_not_found() {
        let harness = Harness::registration().await;
        let error = harness
            .services
            .general_partners
            .create("txn-missing", jack_jones(), None)
            .await
            .unwrap_err();
        assert!(is_not_found(&error));
    }
}

// ============================================================================
// LIMITED PARTNERS
// ============================================================================

mod limited_partners {
    use super::*;
    use domain_partnership::LimitedPartnerData;

    fn jane_smith() -> LimitedPartnerData {
        LimitedPartnerData::new(PartnerData::person(PersonDetails {
            forename: Some("Jane".to_string()),
            surname: Some("Smith".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 4, 12),
            nationality1: Some(Nationality::British),
            usual_residential_address: Some(address()),
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn test_partnership_type_comes_from_the_partnership() {
        let harness = Harness::registration().await;
        harness
            .services
            .partnerships
            .create("txn-1", registered_partnership(), None)
            .await
            .unwrap();

        let view = harness
            .services
            .limited_partners
            .create("txn-1", jane_smith(), None)
            .await
            .unwrap();

        assert_eq!(view.data.partnership_type, Some(PartnershipType::Pflp));
        // private funds take no contribution details
        assert!(view.completed);
    }

    #[tokio::test]
    async fn test_private_fund_partner_rejects_contributions() {
        let harness = Harness::registration().await;
        harness
            .services
            .partnerships
            .create("txn-1", registered_partnership(), None)
            .await
            .unwrap();

        let mut data = jane_smith();
        data.contribution_currency_value = Some("1000.00".to_string());

        let error = harness
            .services
            .limited_partners
            .create("txn-1", data, None)
            .await
            .unwrap_err();
        assert_eq!(error.validation_errors().unwrap().len(), 1);
    }
}

// ============================================================================
// PARTNERSHIP AND COSTS
// ============================================================================

mod partnership {
    use super::*;

    #[tokio::test]
    async fn test_registration_partnership_is_complete_and_charged() {
        let harness = Harness::registration().await;
        let view = harness
            .services
            .partnerships
            .create("txn-1", registered_partnership(), None)
            .await
            .unwrap();
        assert!(view.completed);

        let costs = harness.services.partnerships.costs("txn-1", &view.id).await.unwrap();
        assert_eq!(costs.len(), 1);
        assert_eq!(costs[0].amount, "100.00");
    }

    #[tokio::test]
    async fn test_registration_requires_name_ending() {
        let harness = Harness::registration().await;
        let data = PartnershipData {
            name_ending: None,
            ..registered_partnership()
        };

        let error = harness
            .services
            .partnerships
            .create("txn-1", data, None)
            .await
            .unwrap_err();
        let errors = error.validation_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location, "data.nameEnding");
    }

    #[tokio::test]
    async fn test_post_transition_name_update_costs_twenty_pounds() {
        let harness = Harness::with_transaction(
            Transaction::new("txn-1", FilingMode::PostTransition).with_company_number("LP123456"),
        )
        .await;
        let data = PartnershipData {
            kind: Some(PostTransitionKind::UpdatePartnershipName.description().to_string()),
            partnership_name: Some("Bridge Street Holdings".to_string()),
            name_ending: Some(PartnershipNameEnding::LimitedPartnership),
            date_of_update: NaiveDate::from_ymd_opt(2024, 1, 10),
            ..Default::default()
        };

        let view = harness
            .services
            .partnerships
            .create("txn-1", data, None)
            .await
            .unwrap();
        assert!(view.completed);

        let costs = harness.services.partnerships.costs("txn-1", &view.id).await.unwrap();
        assert_eq!(costs.len(), 1);
        assert_eq!(costs[0].amount, "20.00");
    }

    #[tokio::test]
    async fn test_post_transition_create_requires_known_kind() {
        let harness =
            Harness::with_transaction(Transaction::new("txn-1", FilingMode::PostTransition)).await;
        let data = PartnershipData {
            kind: Some("limited-partnership#rename-everything".to_string()),
            ..Default::default()
        };

        let error = harness
            .services
            .partnerships
            .create("txn-1", data, None)
            .await
            .unwrap_err();
        match error {
            PartnershipError::Service(message) => assert_eq!(
                message,
                "No strategy found for kind: limited-partnership#rename-everything"
            ),
            other => panic!("expected a service error, got {other:?}"),
        }
    }
}

// ============================================================================
// INCORPORATION AND FILINGS
// ============================================================================

mod filings {
    use super::*;

    #[tokio::test]
    async fn test_filing_is_refused_until_complete() {
        let harness = Harness::registration().await;
        let incorporation = harness
            .services
            .incorporations
            .create("txn-1", None)
            .await
            .unwrap();
        let mut partner = jack_jones();
        partner.service_address = None;
        harness
            .services
            .general_partners
            .create("txn-1", partner, None)
            .await
            .unwrap();

        let error = harness
            .services
            .filings
            .generate("txn-1", &incorporation.id)
            .await
            .unwrap_err();
        let errors = error.validation_errors().unwrap();
        assert!(errors.iter().any(|e| e.location == "data.serviceAddress"));
    }

    #[tokio::test]
    async fn test_filing_collects_every_resource() {
        let harness = Harness::registration().await;
        let incorporation = harness
            .services
            .incorporations
            .create("txn-1", None)
            .await
            .unwrap();
        harness
            .services
            .partnerships
            .create("txn-1", registered_partnership(), None)
            .await
            .unwrap();
        harness
            .services
            .general_partners
            .create("txn-1", jack_jones(), None)
            .await
            .unwrap();

        let filing = harness
            .services
            .filings
            .generate("txn-1", &incorporation.id)
            .await
            .unwrap();

        assert_eq!(filing.description, "Register a Limited Partnership");
        assert_eq!(filing.kind, FilingMode::Registration.description());
        assert!(filing.data.limited_partnership.is_some());
        assert_eq!(filing.data.general_partners.len(), 1);
        assert!(filing.data.limited_partners.is_empty());
    }

    #[tokio::test]
    async fn test_post_transition_has_no_incorporation() {
        let harness =
            Harness::with_transaction(Transaction::new("txn-1", FilingMode::PostTransition)).await;
        let error = harness
            .services
            .incorporations
            .create("txn-1", None)
            .await
            .unwrap_err();
        assert!(matches!(error, PartnershipError::Service(_)));
    }
}
