use singly::List;

fn main() {
  env_logger::init();

  let mut list = List::new();

  list.append("hello!");
  list.append("world!");
  print!("{}", list);

  println!("{}", list.len());

  list.prepend("shelley says: ");
  print!("{}", list);

  println!("{}", list.contains(&"hello!"));
  println!("{}", list.contains(&"shelley"));

  let _ = list.delete(&"world!");
  print!("{}", list);
}
