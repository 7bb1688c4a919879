//! Post-Transition Tests
//!
//! Changes to registered partnerships, filed one per transaction and
//! validated by the strategy registered for their kind.

use domain_partnership::PostTransitionKind;
use test_utils::{
    assert_has_error, assert_locations, assert_single_fee, assert_valid, expect_service_error,
    expect_validation_errors, DateFixtures, GeneralPartnerBuilder, LimitedPartnerBuilder,
    MoneyFixtures, PartnerBuilder, PartnershipBuilder, TestHarness, TransactionFixtures,
};

async fn post_transition() -> (TestHarness, String) {
    let harness = TestHarness::with_registered_company().await;
    let id = harness
        .transaction(TransactionFixtures::post_transition("txn-pt"))
        .await;
    (harness, id)
}

mod general_partners {
    use super::*;

    #[tokio::test]
    async fn test_add_person_is_complete_and_free() {
        let (harness, tid) = post_transition().await;
        let data = GeneralPartnerBuilder::person()
            .partner(|p| {
                p.kind(PostTransitionKind::AddGeneralPartnerPerson)
                    .date_effective_from(DateFixtures::change())
            })
            .build();

        let view = harness
            .services
            .general_partners
            .create(&tid, data, None)
            .await
            .unwrap();
        assert!(view.completed);

        let costs = harness.services.general_partners.costs(&tid, &view.id).await.unwrap();
        assert!(costs.is_empty());
    }

    #[tokio::test]
    async fn test_add_before_incorporation_is_rejected() {
        let (harness, tid) = post_transition().await;
        let before = DateFixtures::incorporated().pred_opt().unwrap();
        let data = GeneralPartnerBuilder::person()
            .partner(|p| {
                p.kind(PostTransitionKind::AddGeneralPartnerPerson)
                    .date_effective_from(before)
            })
            .build();

        let errors =
            expect_validation_errors(harness.services.general_partners.create(&tid, data, None).await);
        assert_has_error(
            &errors,
            "data.dateEffectiveFrom",
            "Partner date effective from cannot be before the incorporation date",
        );
    }

    #[tokio::test]
    async fn test_remove_legal_entity_needs_only_removal_details() {
        let (harness, tid) = post_transition().await;
        let data = GeneralPartnerBuilder::legal_entity()
            .partner(|p| p.kind(PostTransitionKind::RemoveGeneralPartnerLegalEntity))
            .build();

        let errors = expect_validation_errors(
            harness
                .services
                .general_partners
                .create(&tid, data.clone(), None)
                .await,
        );
        assert_locations(&errors, &["data.ceaseDate", "data.removeConfirmationChecked"]);

        let data = GeneralPartnerBuilder::legal_entity()
            .partner(|p| {
                p.kind(PostTransitionKind::RemoveGeneralPartnerLegalEntity)
                    .cease_date(DateFixtures::change())
                    .remove_confirmed()
            })
            .build();
        let view = harness
            .services
            .general_partners
            .create(&tid, data, None)
            .await
            .unwrap();
        assert!(view.completed);
    }

    #[tokio::test]
    async fn test_update_person_waits_for_address_choices() {
        let (harness, tid) = post_transition().await;
        let data = GeneralPartnerBuilder::person()
            .partner(|p| {
                p.kind(PostTransitionKind::UpdateGeneralPartnerPerson)
                    .date_effective_from(DateFixtures::change())
                    .date_of_update(DateFixtures::change())
            })
            .build();

        let view = harness
            .services
            .general_partners
            .create(&tid, data, None)
            .await
            .unwrap();
        assert!(!view.completed);

        let status = harness
            .services
            .general_partners
            .validation_status(&tid, &view.id)
            .await
            .unwrap();
        assert_locations(
            &status.errors,
            &[
                "data.updateUsualResidentialAddressRequired",
                "data.updateServiceAddressRequired",
            ],
        );
    }

    #[tokio::test]
    async fn test_unknown_kind_is_a_service_error() {
        let (harness, tid) = post_transition().await;
        let mut data = GeneralPartnerBuilder::person().build();
        data.partner.kind = Some("limited-partnership#promote-general-partner".to_string());

        let message =
            expect_service_error(harness.services.general_partners.create(&tid, data, None).await);
        assert_eq!(
            message,
            "No strategy found for kind: limited-partnership#promote-general-partner"
        );
    }
}

mod limited_partners {
    use super::*;

    #[tokio::test]
    async fn test_remove_person() {
        let (harness, tid) = post_transition().await;
        let data = LimitedPartnerBuilder::person()
            .partner(|p| {
                p.kind(PostTransitionKind::RemoveLimitedPartnerPerson)
                    .cease_date(DateFixtures::change())
                    .remove_confirmed()
            })
            .build();

        let view = harness
            .services
            .limited_partners
            .create(&tid, data, None)
            .await
            .unwrap();
        let status = harness
            .services
            .limited_partners
            .validation_status(&tid, &view.id)
            .await
            .unwrap();
        assert_valid(&status);
    }

    #[tokio::test]
    async fn test_update_legal_entity_with_choice_is_complete() {
        let (harness, tid) = post_transition().await;
        let data = LimitedPartnerBuilder::from_partner(
            PartnerBuilder::legal_entity()
                .kind(PostTransitionKind::UpdateLimitedPartnerLegalEntity)
                .date_effective_from(DateFixtures::change())
                .date_of_update(DateFixtures::change())
                .address_choices(false),
        )
        .build();

        let view = harness
            .services
            .limited_partners
            .create(&tid, data, None)
            .await
            .unwrap();
        assert!(view.completed);
    }
}

mod partnership {
    use super::*;

    #[tokio::test]
    async fn test_name_change_is_charged() {
        let (harness, tid) = post_transition().await;
        let data = PartnershipBuilder::change(PostTransitionKind::UpdatePartnershipName)
            .partnership_name("Bridge Street Holdings")
            .name_ending(Some(domain_partnership::PartnershipNameEnding::LimitedPartnership))
            .date_of_update(DateFixtures::change())
            .build();

        let view = harness
            .services
            .partnerships
            .create(&tid, data, None)
            .await
            .unwrap();
        assert!(view.completed);

        let costs = harness.services.partnerships.costs(&tid, &view.id).await.unwrap();
        assert_single_fee(&costs, &MoneyFixtures::name_change_fee());
    }

    #[tokio::test]
    async fn test_term_change_needs_term_and_date() {
        let (harness, tid) = post_transition().await;
        let data = PartnershipBuilder::change(PostTransitionKind::UpdatePartnershipTerm).build();

        let view = harness
            .services
            .partnerships
            .create(&tid, data, None)
            .await
            .unwrap();
        let status = harness
            .services
            .partnerships
            .validation_status(&tid, &view.id)
            .await
            .unwrap();
        assert_locations(&status.errors, &["data.term", "data.dateOfUpdate"]);
    }
}

mod transition {
    use super::*;

    #[tokio::test]
    async fn test_transition_partner_needs_date_effective_from() {
        let harness = TestHarness::with_registered_company().await;
        let tid = harness
            .transaction(TransactionFixtures::transition("txn-tr"))
            .await;

        let errors = expect_validation_errors(
            harness
                .services
                .general_partners
                .create(&tid, GeneralPartnerBuilder::person().build(), None)
                .await,
        );
        assert_locations(&errors, &["data.dateEffectiveFrom"]);
    }

    #[tokio::test]
    async fn test_transition_partnership_needs_number() {
        let harness = TestHarness::with_registered_company().await;
        let tid = harness
            .transaction(TransactionFixtures::transition("txn-tr"))
            .await;

        let view = harness
            .services
            .partnerships
            .create(
                &tid,
                PartnershipBuilder::transition(TransactionFixtures::COMPANY_NUMBER).build(),
                None,
            )
            .await
            .unwrap();
        assert!(view.completed);

        let costs = harness.services.partnerships.costs(&tid, &view.id).await.unwrap();
        assert!(costs.is_empty());
    }
}
