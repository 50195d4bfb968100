use ev_core::prelude::*;

pub fn cmd() -> EmptyResult {
    print!("{}", render_crds()?);
    Ok(())
}

// One multi-document YAML stream, suitable for `evctl crd | kubectl apply -f -`
pub(crate) fn render_crds() -> anyhow::Result<String> {
    let crds = [
        Channel::crd(),
        ClusterBus::crd(),
        ClusterProvisioner::crd(),
        Configuration::crd(),
        EventSource::crd(),
        EventType::crd(),
        Flow::crd(),
        Route::crd(),
        Subscription::crd(),
    ];

    let mut out = String::new();
    for crd in &crds {
        out += &format!("---\n{}", serde_yaml::to_string(crd)?);
    }
    Ok(out)
}
