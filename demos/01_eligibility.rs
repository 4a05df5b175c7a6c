/// what-if eligibility checks at different points in a customer's history
use loan_origination_rs::{
    Customer, LoanOriginationService, LoanStore, MemoryStore, Money, NewLoan, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new();
    let customer = Customer::new("Ravi", "Iyer", "9876500002", 40, Money::from_major(80_000));
    let customer_id = store.insert_customer(customer)?;

    let mut service = LoanOriginationService::new(store);

    // no history yet: score 0, rejected
    let report = service.check_eligibility_now(
        customer_id,
        Money::from_major(200_000),
        Rate::from_percentage(10),
        24,
        None,
    )?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    // four loans on record: score 40, the 12% floor kicks in
    for _ in 0..4 {
        let loan = NewLoan::new(
            customer_id,
            Money::from_major(40_000),
            Rate::from_percentage(14),
            12,
            Money::from_major(3_600),
            chrono::Utc::now(),
        );
        service.store().insert_loan(loan)?;
    }

    let report = service.check_eligibility_now(
        customer_id,
        Money::from_major(200_000),
        Rate::from_percentage(10),
        24,
        None,
    )?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    // re-evaluating one of the existing loans leaves it out of the burden
    let existing = service.store().loans_for_customer(customer_id)?[0].id;
    let report = service.check_eligibility_now(
        customer_id,
        Money::from_major(40_000),
        Rate::from_percentage(14),
        12,
        Some(existing),
    )?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
