use gatecheck_web::App;

fn main() {
    dioxus::launch(App);
}
