// tests/common/mod.rs
use crate::config::settings::Settings;
use crate::receipt::{ClientInfo, Company, Item, Payment, Receipt, SellRequest, ServiceInfo, Vat};

/// Settings pointing the client at a mock provider.
pub fn mock_settings(base_url: &str) -> Settings {
    Settings {
        base_url: base_url.to_string(),
        login: "v4-online-test".into(),
        password: "secret".into(),
        group_code: "grp1".into(),
        inn: "5544332219".into(),
        payment_address: "shop.example.org".into(),
        company_email: "chek@romashka.ru".into(),
        callback_url: "http://example.org/callback".into(),
    }
}

pub fn sample_sell_request(settings: &Settings) -> SellRequest {
    let item = Item::new(
        "Monitor Samsung C27F390FHI",
        16459.00,
        1.0,
        "pcs",
        "partial_payment",
        "service",
        Vat::none(),
    );
    let total = item.sum;
    SellRequest::new(
        "1700000000123".into(),
        Receipt {
            client: ClientInfo { email: "".into() },
            company: Company {
                email: settings.company_email.clone(),
                inn: settings.inn.clone(),
                payment_address: settings.payment_address.clone(),
            },
            items: vec![item],
            payments: vec![Payment { kind: 1, sum: total }],
            total,
        },
        ServiceInfo { callback_url: settings.callback_url.clone() },
    )
}
