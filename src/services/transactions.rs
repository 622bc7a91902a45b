//! Create, list, update and delete transactions.
//!
//! Every write runs the [validation engine](crate::validation) against the
//! proposed final state of the record and the current state of the person and
//! category it references; nothing is persisted on failure.

use rust_decimal::Decimal;

use crate::{
    Error,
    models::{DatabaseID, Transaction, TransactionData},
    stores::{CategoryStore, PersonStore, TransactionStore},
    validation::validate,
};

use super::found;

/// The number of decimal places amounts are kept at.
const MONETARY_SCALE: u32 = 2;

fn checked_data(mut data: TransactionData) -> Result<TransactionData, Error> {
    if data.description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }

    if data.amount <= Decimal::ZERO {
        return Err(Error::NonPositiveAmount);
    }

    data.amount = data.amount.round_dp(MONETARY_SCALE);

    Ok(data)
}

/// Run the validation engine for `data` against the currently stored person
/// and category it references.
fn validated(
    person_store: &impl PersonStore,
    category_store: &impl CategoryStore,
    data: TransactionData,
) -> Result<TransactionData, Error> {
    let person = found(person_store.get(data.person_id))?;
    let category = found(category_store.get(data.category_id))?;

    validate(&data, person.as_ref(), category.as_ref())?;

    Ok(data)
}

/// Validate and store a new transaction.
///
/// # Errors
/// Returns [Error::Validation] with the rejection reason if the candidate
/// breaks a business rule, in which case nothing is persisted.
pub fn create_transaction(
    person_store: &impl PersonStore,
    category_store: &impl CategoryStore,
    transaction_store: &impl TransactionStore,
    data: TransactionData,
) -> Result<Transaction, Error> {
    let data = validated(person_store, category_store, checked_data(data)?)?;

    transaction_store.create(data)
}

/// List every stored transaction.
pub fn list_transactions(
    transaction_store: &impl TransactionStore,
) -> Result<Vec<Transaction>, Error> {
    transaction_store.get_all()
}

/// Merge `data` into the stored transaction with `transaction_id`, re-run the
/// full validation against the merged candidate and persist it.
///
/// The input carries the full record, so the merged candidate is `data`
/// itself; the initial lookup only confirms the target exists.
///
/// # Errors
/// Returns [Error::UpdateMissingTransaction] if the id is unknown, or
/// [Error::Validation] if the merged candidate breaks a business rule. The
/// stored transaction is unchanged in both cases.
pub fn update_transaction(
    person_store: &impl PersonStore,
    category_store: &impl CategoryStore,
    transaction_store: &impl TransactionStore,
    transaction_id: DatabaseID,
    data: TransactionData,
) -> Result<Transaction, Error> {
    let data = checked_data(data)?;

    found(transaction_store.get(transaction_id))?.ok_or(Error::UpdateMissingTransaction)?;

    let data = validated(person_store, category_store, data)?;

    transaction_store.update(transaction_id, data)
}

/// Delete the transaction with `transaction_id`. No cascade: nothing
/// references transactions.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if the id is unknown.
pub fn delete_transaction(
    transaction_store: &impl TransactionStore,
    transaction_id: DatabaseID,
) -> Result<(), Error> {
    transaction_store.delete(transaction_id)
}

#[cfg(test)]
mod transactions_service_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use rust_decimal::Decimal;

    use crate::{
        Error,
        db::initialize,
        models::{
            Category, CategoryData, Person, PersonData, Purpose, TransactionData, TransactionKind,
        },
        stores::{
            CategoryStore, PersonStore, TransactionStore,
            sqlite::{SQLiteCategoryStore, SQLitePersonStore, SQLiteTransactionStore},
        },
        validation::ValidationError,
    };

    use super::{create_transaction, delete_transaction, update_transaction};

    struct Fixture {
        person_store: SQLitePersonStore,
        category_store: SQLiteCategoryStore,
        transaction_store: SQLiteTransactionStore,
    }

    fn get_test_fixture() -> Fixture {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let connection = Arc::new(Mutex::new(connection));

        Fixture {
            person_store: SQLitePersonStore::new(connection.clone()),
            category_store: SQLiteCategoryStore::new(connection.clone()),
            transaction_store: SQLiteTransactionStore::new(connection),
        }
    }

    fn insert_person(fixture: &Fixture, name: &str, age: u32) -> Person {
        fixture
            .person_store
            .create(PersonData {
                name: name.to_owned(),
                age,
            })
            .unwrap()
    }

    fn insert_category(fixture: &Fixture, description: &str, purpose: Purpose) -> Category {
        fixture
            .category_store
            .create(CategoryData {
                description: description.to_owned(),
                purpose,
            })
            .unwrap()
    }

    fn transaction_data(
        cents: i64,
        kind: TransactionKind,
        person: &Person,
        category: &Category,
    ) -> TransactionData {
        TransactionData {
            description: "Rust Pie".to_owned(),
            amount: Decimal::new(cents, 2),
            kind,
            person_id: person.id,
            category_id: category.id,
        }
    }

    #[test]
    fn create_transaction_succeeds() {
        let fixture = get_test_fixture();
        let person = insert_person(&fixture, "Ana", 30);
        let category = insert_category(&fixture, "Misc", Purpose::Both);

        let transaction = create_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            transaction_data(100_00, TransactionKind::Income, &person, &category),
        )
        .unwrap();

        assert!(transaction.id > 0);
        assert_eq!(transaction.amount, Decimal::new(100_00, 2));
        assert_eq!(
            fixture.transaction_store.get(transaction.id),
            Ok(transaction)
        );
    }

    #[test]
    fn create_transaction_rounds_amount_to_two_decimal_places() {
        let fixture = get_test_fixture();
        let person = insert_person(&fixture, "Ana", 30);
        let category = insert_category(&fixture, "Misc", Purpose::Both);

        let mut data = transaction_data(0, TransactionKind::Expense, &person, &category);
        data.amount = Decimal::new(10_0149, 4);

        let transaction = create_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            data,
        )
        .unwrap();

        assert_eq!(transaction.amount, Decimal::new(10_01, 2));
    }

    #[test]
    fn create_transaction_fails_for_unknown_person() {
        let fixture = get_test_fixture();
        let person = insert_person(&fixture, "Ana", 30);
        let category = insert_category(&fixture, "Misc", Purpose::Both);

        let mut data = transaction_data(100_00, TransactionKind::Income, &person, &category);
        data.person_id = person.id + 42;

        let result = create_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            data,
        );

        assert_eq!(
            result,
            Err(Error::Validation(ValidationError::PersonNotFound))
        );
        assert_eq!(fixture.transaction_store.get_all(), Ok(vec![]));
    }

    #[test]
    fn create_income_transaction_for_minor_fails() {
        let fixture = get_test_fixture();
        let minor = insert_person(&fixture, "Bruno", 16);
        // Age takes precedence even though income fits the category's purpose.
        let category = insert_category(&fixture, "Salary", Purpose::Income);

        let result = create_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            transaction_data(100_00, TransactionKind::Income, &minor, &category),
        );

        assert_eq!(
            result,
            Err(Error::Validation(ValidationError::AgeRestriction))
        );
        assert_eq!(fixture.transaction_store.get_all(), Ok(vec![]));
    }

    #[test]
    fn create_expense_transaction_for_minor_succeeds() {
        let fixture = get_test_fixture();
        let minor = insert_person(&fixture, "Bruno", 16);
        let category = insert_category(&fixture, "Snacks", Purpose::Expense);

        let result = create_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            transaction_data(5_00, TransactionKind::Expense, &minor, &category),
        );

        assert!(result.is_ok());
    }

    #[test]
    fn create_transaction_fails_for_incompatible_purpose() {
        let fixture = get_test_fixture();
        let person = insert_person(&fixture, "Ana", 30);
        let category = insert_category(&fixture, "Wages", Purpose::Income);

        let result = create_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            transaction_data(10_00, TransactionKind::Expense, &person, &category),
        );

        assert_eq!(
            result,
            Err(Error::Validation(ValidationError::IncompatiblePurpose))
        );
    }

    #[test]
    fn create_transaction_rejects_non_positive_amount() {
        let fixture = get_test_fixture();
        let person = insert_person(&fixture, "Ana", 30);
        let category = insert_category(&fixture, "Misc", Purpose::Both);

        for cents in [0, -10_00] {
            let result = create_transaction(
                &fixture.person_store,
                &fixture.category_store,
                &fixture.transaction_store,
                transaction_data(cents, TransactionKind::Expense, &person, &category),
            );

            assert_eq!(result, Err(Error::NonPositiveAmount));
        }
    }

    #[test]
    fn update_transaction_with_unknown_id_fails() {
        let fixture = get_test_fixture();
        let person = insert_person(&fixture, "Ana", 30);
        let category = insert_category(&fixture, "Misc", Purpose::Both);

        let result = update_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            999,
            transaction_data(10_00, TransactionKind::Expense, &person, &category),
        );

        assert_eq!(result, Err(Error::UpdateMissingTransaction));
    }

    #[test]
    fn update_transaction_revalidates_the_merged_candidate() {
        let fixture = get_test_fixture();
        let minor = insert_person(&fixture, "Bruno", 16);
        let category = insert_category(&fixture, "Misc", Purpose::Both);

        let stored = create_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            transaction_data(10_00, TransactionKind::Expense, &minor, &category),
        )
        .unwrap();

        // Flipping the stored expense to income must be re-checked against the
        // owner's age.
        let result = update_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            stored.id,
            transaction_data(10_00, TransactionKind::Income, &minor, &category),
        );

        assert_eq!(
            result,
            Err(Error::Validation(ValidationError::AgeRestriction))
        );
        assert_eq!(fixture.transaction_store.get(stored.id), Ok(stored));
    }

    #[test]
    fn update_transaction_to_unknown_category_leaves_record_unchanged() {
        let fixture = get_test_fixture();
        let person = insert_person(&fixture, "Ana", 30);
        let category = insert_category(&fixture, "Misc", Purpose::Both);

        let stored = create_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            transaction_data(10_00, TransactionKind::Expense, &person, &category),
        )
        .unwrap();

        let mut data = transaction_data(99_99, TransactionKind::Expense, &person, &category);
        data.category_id = category.id + 42;

        let result = update_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            stored.id,
            data,
        );

        assert_eq!(
            result,
            Err(Error::Validation(ValidationError::CategoryNotFound))
        );
        assert_eq!(fixture.transaction_store.get(stored.id), Ok(stored));
    }

    #[test]
    fn update_transaction_succeeds() {
        let fixture = get_test_fixture();
        let person = insert_person(&fixture, "Ana", 30);
        let category = insert_category(&fixture, "Misc", Purpose::Both);

        let stored = create_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            transaction_data(10_00, TransactionKind::Expense, &person, &category),
        )
        .unwrap();

        let updated = update_transaction(
            &fixture.person_store,
            &fixture.category_store,
            &fixture.transaction_store,
            stored.id,
            transaction_data(25_00, TransactionKind::Income, &person, &category),
        )
        .unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.amount, Decimal::new(25_00, 2));
        assert_eq!(updated.kind, TransactionKind::Income);
    }

    #[test]
    fn delete_transaction_with_unknown_id_fails() {
        let fixture = get_test_fixture();

        let result = delete_transaction(&fixture.transaction_store, 999);

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
    }
}
