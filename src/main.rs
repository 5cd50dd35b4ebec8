fn main() {
    tank_battle::game::run();
}
