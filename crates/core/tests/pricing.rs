//! End-to-end pricing walkthroughs for the cart and checkout chain.

use rust_decimal::Decimal;
use testresult::TestResult;

use roastery::prelude::*;

fn dec(s: &str) -> Decimal {
    s.parse().expect("decimal literal")
}

fn ethiopia(qty: u32, mode: PurchaseMode) -> CartLine {
    CartLine {
        id: "ethiopia".into(),
        name: "Ethiopia Roast".into(),
        image: "product1.png".into(),
        unit_price_individual: dec("12.50"),
        unit_price_bulk: dec("10.99"),
        qty,
        mode,
    }
}

fn colombia(qty: u32, mode: PurchaseMode) -> CartLine {
    CartLine {
        id: "colombia".into(),
        name: "Colombia Supremo".into(),
        image: "product2.png".into(),
        unit_price_individual: dec("11.75"),
        unit_price_bulk: dec("9.95"),
        qty,
        mode,
    }
}

#[test]
fn mixed_cart_walkthrough_with_subtotal_coupon() -> TestResult {
    let pricing = PricingConfig::default();
    let mut cart = Cart::new();

    cart.add(ethiopia(2, PurchaseMode::Bulk)); // 21.98 - 10% = 19.78
    cart.add(colombia(3, PurchaseMode::Individual)); // 35.25
    cart.apply_coupon(ActiveCoupon {
        code: "beans20".into(),
        description: "20% off the cart".into(),
        discount_percent: dec("20"),
        target: CouponTarget::Subtotal,
    });

    let totals = cart.totals(&pricing);
    assert_eq!(totals.subtotal, dec("55.03"));
    assert_eq!(totals.coupon_amount_on_subtotal, dec("11.01")); // 11.006 rounded
    assert_eq!(totals.subtotal_after_coupon, dec("44.02"));

    let quote = quote(
        &cart,
        &pricing,
        &QuoteInputs {
            delivery_mode: DeliveryMode::Delivery,
            delivery_fee: dec("7.90"),
            tip_preset_percent: dec("4"),
            tip_custom: None,
            use_credits: true,
        },
    );

    assert_eq!(quote.tip, dec("1.76")); // 4% of 44.02, rounded
    assert_eq!(quote.tax, dec("3.08")); // 44.02 * 0.07 = 3.0814
    assert_eq!(quote.delivery_fee_after_coupon, dec("7.90"));
    assert_eq!(quote.credits, dec("8"));
    // 44.02 + 7.90 + 1.76 + 1.50 + 3.08 - 8.00
    assert_eq!(quote.total_payable, dec("50.26"));

    Ok(())
}

#[test]
fn shipping_coupon_only_touches_the_delivery_fee() -> TestResult {
    let pricing = PricingConfig::default();
    let mut cart = Cart::new();

    cart.add(colombia(2, PurchaseMode::Individual)); // 23.50
    cart.apply_coupon(ActiveCoupon {
        code: "freight50".into(),
        description: "half off shipping".into(),
        discount_percent: dec("50"),
        target: CouponTarget::Shipping,
    });

    let totals = cart.totals(&pricing);
    assert_eq!(totals.subtotal, dec("23.50"));
    assert_eq!(totals.subtotal_after_coupon, dec("23.50"));

    let delivery = quote(
        &cart,
        &pricing,
        &QuoteInputs {
            delivery_mode: DeliveryMode::Delivery,
            delivery_fee: dec("7.90"),
            tip_preset_percent: Decimal::ZERO,
            tip_custom: None,
            use_credits: false,
        },
    );
    assert_eq!(delivery.shipping_coupon_amount, dec("3.95"));
    assert_eq!(delivery.delivery_fee_after_coupon, dec("3.95"));

    let pickup = quote(
        &cart,
        &pricing,
        &QuoteInputs {
            delivery_mode: DeliveryMode::Pickup,
            delivery_fee: dec("7.90"),
            tip_preset_percent: Decimal::ZERO,
            tip_custom: None,
            use_credits: false,
        },
    );
    assert_eq!(pickup.shipping_coupon_amount, Decimal::ZERO);
    assert_eq!(pickup.delivery_fee_after_coupon, Decimal::ZERO);

    Ok(())
}

#[test]
fn quantity_mutations_stay_clamped_through_the_chain() -> TestResult {
    let pricing = PricingConfig::default();
    let mut cart = Cart::new();

    cart.add(ethiopia(0, PurchaseMode::Individual));
    assert_eq!(cart.lines.first().map(|l| l.qty), Some(1));

    cart.update_qty("ethiopia", 20_000);
    assert_eq!(cart.lines.first().map(|l| l.qty), Some(9999));

    let totals = cart.totals(&pricing);
    assert_eq!(totals.subtotal, dec("124987.50")); // 9999 x 12.50

    Ok(())
}
